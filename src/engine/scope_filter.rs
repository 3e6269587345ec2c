// ==========================================
// ERP运营驾驶舱 - 集合过滤引擎
// ==========================================
// 职责: 把产品范围应用到各源集合
// 设计: 每个集合一条命名的连接规则,集中登记成规则表,
//       逐集合可审计、可单测,不走多态继承
// 输出: 借用视图 (不克隆记录),每次筛选变化重算代价低
// ==========================================

use crate::domain::basics::{Partner, StaffMember};
use crate::domain::inventory::StockProduction;
use crate::domain::product::Product;
use crate::domain::production::ProductionPlan;
use crate::domain::purchasing::{OutsourcingOrder, PendingProcurementItem, PurchaseOrder};
use crate::domain::quality::DefectRecord;
use crate::domain::sales::SalesOrder;
use crate::domain::snapshot::DashboardSnapshot;
use crate::engine::scope::ProductScope;

// ==========================================
// LinkRule - 产品连接规则
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRule {
    /// 记录自带扁平 product_id
    DirectProduct,
    /// 记录带明细数组,任一明细命中即保留 (存在连接,非全称连接)
    AnyItemProduct,
    /// 不良记录: 计划工序命中 或 订单任一明细命中 或 完全无连接
    DefectLinkage,
    /// 组织级集合,不参与产品范围过滤
    Unscoped,
}

/// 集合连接规则登记表
///
/// 全部源集合在此登记,规则不在别处散落。
/// 孤儿不良记录(无任何产品连接)在过滤下保留,属于刻意的保守
/// 包含策略: 宁可多显示未挂接的品质问题,也不静默隐藏。
pub const COLLECTION_RULES: &[(&str, LinkRule)] = &[
    ("orders", LinkRule::AnyItemProduct),
    ("plans", LinkRule::AnyItemProduct),
    ("purchase_orders", LinkRule::AnyItemProduct),
    ("outsourcing_orders", LinkRule::AnyItemProduct),
    ("pending_purchase_items", LinkRule::DirectProduct),
    ("pending_outsourcing_items", LinkRule::DirectProduct),
    ("stock_productions", LinkRule::DirectProduct),
    ("defects", LinkRule::DefectLinkage),
    ("partners", LinkRule::Unscoped),
    ("products", LinkRule::Unscoped),
    ("staff", LinkRule::Unscoped),
];

// ==========================================
// ScopedCollections - 过滤后的借用视图
// ==========================================
#[derive(Debug)]
pub struct ScopedCollections<'a> {
    pub orders: Vec<&'a SalesOrder>,
    pub plans: Vec<&'a ProductionPlan>,
    pub purchase_orders: Vec<&'a PurchaseOrder>,
    pub outsourcing_orders: Vec<&'a OutsourcingOrder>,
    pub pending_purchase_items: Vec<&'a PendingProcurementItem>,
    pub pending_outsourcing_items: Vec<&'a PendingProcurementItem>,
    pub stock_productions: Vec<&'a StockProduction>,
    pub defects: Vec<&'a DefectRecord>,
    // 组织级集合原样透传
    pub partners: &'a [Partner],
    pub products: &'a [Product],
    pub staff: &'a [StaffMember],
}

// ==========================================
// ScopeFilter - 过滤引擎
// ==========================================
pub struct ScopeFilter;

impl ScopeFilter {
    /// 把产品范围应用到整份快照
    pub fn apply<'a>(
        snapshot: &'a DashboardSnapshot,
        scope: &ProductScope,
    ) -> ScopedCollections<'a> {
        ScopedCollections {
            orders: snapshot
                .orders
                .iter()
                .filter(|o| Self::order_in_scope(o, scope))
                .collect(),
            plans: snapshot
                .plans
                .iter()
                .filter(|p| Self::plan_in_scope(p, scope))
                .collect(),
            purchase_orders: snapshot
                .purchase_orders
                .iter()
                .filter(|po| Self::purchase_order_in_scope(po, scope))
                .collect(),
            outsourcing_orders: snapshot
                .outsourcing_orders
                .iter()
                .filter(|oo| Self::outsourcing_order_in_scope(oo, scope))
                .collect(),
            pending_purchase_items: snapshot
                .pending_purchase_items
                .iter()
                .filter(|item| Self::pending_item_in_scope(item, scope))
                .collect(),
            pending_outsourcing_items: snapshot
                .pending_outsourcing_items
                .iter()
                .filter(|item| Self::pending_item_in_scope(item, scope))
                .collect(),
            stock_productions: snapshot
                .stock_productions
                .iter()
                .filter(|sp| Self::stock_production_in_scope(sp, scope))
                .collect(),
            defects: snapshot
                .defects
                .iter()
                .filter(|d| Self::defect_in_scope(d, scope))
                .collect(),
            partners: &snapshot.partners,
            products: &snapshot.products,
            staff: &snapshot.staff,
        }
    }

    // ==========================================
    // 逐集合连接规则
    // ==========================================

    /// orders: AnyItemProduct
    pub fn order_in_scope(order: &SalesOrder, scope: &ProductScope) -> bool {
        if scope.is_unfiltered() {
            return true;
        }
        order
            .items
            .iter()
            .any(|item| scope.allows_opt(item.product_id))
    }

    /// plans: AnyItemProduct (经 plan_items)
    pub fn plan_in_scope(plan: &ProductionPlan, scope: &ProductScope) -> bool {
        if scope.is_unfiltered() {
            return true;
        }
        plan.plan_items
            .iter()
            .any(|item| scope.allows_opt(item.product_id))
    }

    /// purchase_orders: AnyItemProduct
    pub fn purchase_order_in_scope(order: &PurchaseOrder, scope: &ProductScope) -> bool {
        if scope.is_unfiltered() {
            return true;
        }
        order
            .items
            .iter()
            .any(|item| scope.allows_opt(item.product_id))
    }

    /// outsourcing_orders: AnyItemProduct
    pub fn outsourcing_order_in_scope(order: &OutsourcingOrder, scope: &ProductScope) -> bool {
        if scope.is_unfiltered() {
            return true;
        }
        order
            .items
            .iter()
            .any(|item| scope.allows_opt(item.product_id))
    }

    /// pending_*_items: DirectProduct
    pub fn pending_item_in_scope(item: &PendingProcurementItem, scope: &ProductScope) -> bool {
        scope.allows_opt(item.product_id)
    }

    /// stock_productions: DirectProduct
    pub fn stock_production_in_scope(sp: &StockProduction, scope: &ProductScope) -> bool {
        scope.allows_opt(sp.product_id)
    }

    /// defects: DefectLinkage
    ///
    /// 计划工序连接命中,或订单任一明细命中,或两条连接都不存在
    /// (孤儿不良记录不被组过滤排除)
    pub fn defect_in_scope(defect: &DefectRecord, scope: &ProductScope) -> bool {
        if scope.is_unfiltered() {
            return true;
        }
        if defect.is_unlinked() {
            return true;
        }

        let via_plan = defect
            .plan_item
            .as_ref()
            .map_or(false, |pi| scope.allows_opt(pi.product_id));
        let via_order = defect.order.as_ref().map_or(false, |o| {
            o.items.iter().any(|item| scope.allows_opt(item.product_id))
        });

        via_plan || via_order
    }
}
