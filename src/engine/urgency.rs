// ==========================================
// ERP运营驾驶舱 - 纳期紧急判定引擎
// ==========================================
// 职责: 找出纳期临近或已逾期、仍需跟进的订单
// 窗口: 纳期距基准日 [-30, +7] 天 (边界含)
//       不对称窗口是刻意的: 同一列表里既看即将到期(≤7天)
//       也看已逾期(≤30天)的纳品; 逾期超过 30 天的单据视为
//       已在别处升级处理,不再进这份列表
// ==========================================

use chrono::NaiveDate;

use crate::domain::sales::SalesOrder;
use crate::domain::types::OrderStatus;
use crate::engine::calendar::parse_iso_date;
use crate::engine::view::UrgentDelivery;

// ==========================================
// UrgencyDetector - 紧急判定
// ==========================================
pub struct UrgencyDetector;

impl UrgencyDetector {
    /// 筛选紧急纳期订单
    ///
    /// 条件 (全部满足):
    /// 1) 状态 ∉ {DELIVERY_COMPLETED, CANCELED}
    /// 2) delivery_date 存在且可解析
    /// 3) -overdue_days ≤ (delivery_date - today) ≤ upcoming_days
    ///
    /// 输出按纳期升序 (最逾期/最临近在前),截断到 limit
    pub fn detect(
        orders: &[&SalesOrder],
        today: NaiveDate,
        overdue_days: i64,
        upcoming_days: i64,
        limit: usize,
    ) -> Vec<UrgentDelivery> {
        let mut urgent: Vec<UrgentDelivery> = Vec::new();

        for order in orders {
            if matches!(
                order.status,
                OrderStatus::DeliveryCompleted | OrderStatus::Canceled
            ) {
                continue;
            }
            let Some(raw_date) = order.delivery_date.as_deref() else {
                continue;
            };
            let Some(delivery) = parse_iso_date(raw_date) else {
                continue;
            };

            let diff_days = (delivery - today).num_days();
            if diff_days < -overdue_days || diff_days > upcoming_days {
                continue;
            }

            urgent.push(UrgentDelivery {
                id: order.id,
                order_no: order.order_no.clone(),
                partner_name: order.partner_name().map(str::to_string),
                delivery_date: raw_date.to_string(),
                status: order.status.code().to_string(),
                days_remaining: diff_days,
            });
        }

        // 定宽 ISO 串,字典序即时间序
        urgent.sort_by(|a, b| a.delivery_date.cmp(&b.delivery_date));
        urgent.truncate(limit);
        urgent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, status: &str, delivery_date: Option<&str>) -> SalesOrder {
        SalesOrder {
            id,
            order_no: Some(format!("SO-{:03}", id)),
            status: OrderStatus::from_code(status),
            order_date: None,
            delivery_date: delivery_date.map(str::to_string),
            actual_delivery_date: None,
            total_amount: None,
            partner: None,
            items: Vec::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn detect(orders: &[SalesOrder]) -> Vec<UrgentDelivery> {
        let refs: Vec<&SalesOrder> = orders.iter().collect();
        UrgencyDetector::detect(&refs, today(), 30, 7, 5)
    }

    #[test]
    fn test_upcoming_within_window() {
        // 4 天后到期 → 命中
        let urgent = detect(&[order(1, "CONFIRMED", Some("2024-06-05"))]);
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].days_remaining, 4);
    }

    #[test]
    fn test_overdue_beyond_window_excluded() {
        // 逾期 31 天 → 超出窗口
        let urgent = detect(&[order(2, "CONFIRMED", Some("2024-05-01"))]);
        assert!(urgent.is_empty());
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let urgent = detect(&[
            order(1, "CONFIRMED", Some("2024-05-02")), // -30, 边界含
            order(2, "CONFIRMED", Some("2024-06-08")), // +7, 边界含
            order(3, "CONFIRMED", Some("2024-06-09")), // +8, 出界
        ]);
        let ids: Vec<i64> = urgent.iter().map(|u| u.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_terminal_statuses_excluded() {
        let urgent = detect(&[
            order(1, "DELIVERY_COMPLETED", Some("2024-06-02")),
            order(2, "CANCELED", Some("2024-06-02")),
            order(3, "CANCELLED", Some("2024-06-02")), // 旧拼写同样排除
        ]);
        assert!(urgent.is_empty());
    }

    #[test]
    fn test_missing_or_bad_delivery_date_excluded() {
        let urgent = detect(&[
            order(1, "CONFIRMED", None),
            order(2, "CONFIRMED", Some("추후 협의")),
        ]);
        assert!(urgent.is_empty());
    }

    #[test]
    fn test_sorted_most_overdue_first_and_capped() {
        let orders: Vec<SalesOrder> = vec![
            order(1, "CONFIRMED", Some("2024-06-07")),
            order(2, "CONFIRMED", Some("2024-05-10")),
            order(3, "CONFIRMED", Some("2024-06-01")),
            order(4, "PENDING", Some("2024-05-20")),
            order(5, "PENDING", Some("2024-06-03")),
            order(6, "PENDING", Some("2024-06-05")),
        ];
        let urgent = detect(&orders);

        assert_eq!(urgent.len(), 5);
        assert_eq!(urgent[0].id, 2); // 最逾期在前
        assert!(urgent
            .windows(2)
            .all(|w| w[0].delivery_date <= w[1].delivery_date));
        // 截断后落选的是纳期最晚的 06-07
        assert!(urgent.iter().all(|u| u.id != 1));
    }
}
