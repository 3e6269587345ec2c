// ==========================================
// ERP运营驾驶舱 - 产品与产品组实体
// ==========================================
// 职责: 产品主数据与两级产品组分类的只读输入模型
// 约束: 产品只挂接小组(MINOR); 大组(MAJOR)通过小组的 parent_id 间接覆盖产品
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::GroupKind;

// ==========================================
// Product - 产品主数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    /// 所属小组; None 表示未分组,任一组过滤生效时即被排除
    #[serde(default)]
    pub group_id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub specification: Option<String>,
}

// ==========================================
// ProductGroup - 产品组 (两级分类)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub id: i64,

    /// MAJOR(大组) 或 MINOR(小组); 未知类型不参与解析
    #[serde(default, rename = "type")]
    pub kind: GroupKind,

    /// 小组指向其大组; 大组为 None
    #[serde(default)]
    pub parent_id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,
}

impl ProductGroup {
    /// 是否为挂接在指定大组下的小组
    pub fn is_minor_of(&self, major_id: i64) -> bool {
        self.kind == GroupKind::Minor && self.parent_id == Some(major_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_hierarchy() {
        let major: ProductGroup =
            serde_json::from_str(r#"{"id": 1, "type": "MAJOR", "name": "기어류"}"#).unwrap();
        let minor: ProductGroup = serde_json::from_str(
            r#"{"id": 2, "type": "MINOR", "parent_id": 1, "name": "평기어"}"#,
        )
        .unwrap();

        assert_eq!(major.kind, GroupKind::Major);
        assert!(minor.is_minor_of(1));
        assert!(!minor.is_minor_of(9));
        assert!(!major.is_minor_of(1));
    }

    #[test]
    fn test_ungrouped_product() {
        let product: Product = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert!(product.group_id.is_none());
    }
}
