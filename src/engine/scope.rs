// ==========================================
// ERP运营驾驶舱 - 产品范围解析引擎
// ==========================================
// 职责: 把两级产品组选择解析为具体的可见产品集合
// 输入: product_groups + products + GroupSelection
// 输出: ProductScope ("不过滤"哨兵 或 具体产品ID集合)
// 约束: "不过滤"与"空集合"是两个不同的结果,
//       大组下没有小组时必须得到空集合而不是不过滤
// ==========================================

use std::collections::HashSet;

use crate::domain::product::{Product, ProductGroup};
use crate::domain::snapshot::GroupSelection;

// ==========================================
// ProductScope - 可见产品范围
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductScope {
    /// 不过滤哨兵: 所有产品可见
    All,
    /// 仅集合内的产品可见 (可能为空集)
    Only(HashSet<i64>),
}

impl ProductScope {
    /// 判断单个产品是否在范围内
    pub fn allows(&self, product_id: i64) -> bool {
        match self {
            ProductScope::All => true,
            ProductScope::Only(ids) => ids.contains(&product_id),
        }
    }

    /// 判断可选的连接键是否在范围内; 缺失的键只在不过滤时通过
    pub fn allows_opt(&self, product_id: Option<i64>) -> bool {
        match self {
            ProductScope::All => true,
            ProductScope::Only(_) => product_id.map_or(false, |id| self.allows(id)),
        }
    }

    /// 是否为不过滤哨兵
    pub fn is_unfiltered(&self) -> bool {
        matches!(self, ProductScope::All)
    }
}

// ==========================================
// ScopeResolver - 范围解析
// ==========================================
pub struct ScopeResolver;

impl ScopeResolver {
    /// 解析产品组选择
    ///
    /// 规则 (按优先级):
    /// 1) 选中小组 → 该小组直属产品 (过期的大组选择被忽略)
    /// 2) 仅选中大组 → 其下所有小组的直属产品
    /// 3) 无选择 → 不过滤哨兵
    ///
    /// 边界:
    /// - 大组下没有小组 → 空集合 (下游指标全为零,不是不过滤)
    /// - 选择指向已删除的组 → 自然落入空集合 (宁可少报,不可漏滤)
    /// - 未分组产品 (group_id=None) 在任何过滤生效时都不可见
    pub fn resolve(
        groups: &[ProductGroup],
        products: &[Product],
        selection: &GroupSelection,
    ) -> ProductScope {
        if let Some(minor_id) = selection.minor_id {
            return ProductScope::Only(Self::products_in_minors(products, |gid| {
                gid == minor_id
            }));
        }

        if let Some(major_id) = selection.major_id {
            let minor_ids: HashSet<i64> = groups
                .iter()
                .filter(|g| g.is_minor_of(major_id))
                .map(|g| g.id)
                .collect();
            return ProductScope::Only(Self::products_in_minors(products, |gid| {
                minor_ids.contains(&gid)
            }));
        }

        ProductScope::All
    }

    /// 收集小组谓词命中的产品
    fn products_in_minors(
        products: &[Product],
        minor_matches: impl Fn(i64) -> bool,
    ) -> HashSet<i64> {
        products
            .iter()
            .filter(|p| p.group_id.map_or(false, &minor_matches))
            .map(|p| p.id)
            .collect()
    }
}
