// ==========================================
// ERP运营驾驶舱 - 状态显示文案 (展示边界)
// ==========================================
// 职责: 原始状态码 → 产品显示文案 (韩文) 的查表
// 约束: 这是展示层的协作件,引擎输出只含原始状态码,
//       引擎内任何地方都不得引用本模块
// 未知状态码回落为码本身,不丢桶
// ==========================================

/// 订单状态显示文案
pub fn order_status_label(code: &str) -> &str {
    match code {
        "PENDING" => "대기",
        "CONFIRMED" => "확정",
        "PRODUCTION_COMPLETED" => "생산 완료",
        "DELIVERY_COMPLETED" => "납품 완료",
        "CANCELED" => "취소",
        other => other,
    }
}

/// 生产计划状态显示文案
pub fn plan_status_label(code: &str) -> &str {
    match code {
        "PENDING" => "대기",
        "PLANNED" => "계획 수립",
        "IN_PROGRESS" => "진행 중",
        "COMPLETED" => "완료",
        "CANCELED" => "취소",
        other => other,
    }
}

/// 库存生产状态显示文案
pub fn stock_production_status_label(code: &str) -> &str {
    match code {
        "PENDING" => "대기",
        "IN_PROGRESS" => "생산 진행 중",
        "COMPLETED" => "완료",
        "CANCELED" => "취소",
        other => other,
    }
}

/// 品质不良状态显示文案
pub fn defect_status_label(code: &str) -> &str {
    match code {
        "OCCURRED" => "발생",
        "RESOLVED" => "처리 완료",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_translate() {
        assert_eq!(order_status_label("PENDING"), "대기");
        assert_eq!(order_status_label("DELIVERY_COMPLETED"), "납품 완료");
        assert_eq!(plan_status_label("IN_PROGRESS"), "진행 중");
        assert_eq!(defect_status_label("RESOLVED"), "처리 완료");
    }

    #[test]
    fn test_unknown_code_falls_back_to_raw() {
        // 未知码回落为码本身
        assert_eq!(order_status_label("ON_HOLD"), "ON_HOLD");
        assert_eq!(defect_status_label("REOPENED"), "REOPENED");
    }
}
