// ==========================================
// ERP运营驾驶舱 - 基础主数据实体
// ==========================================
// 职责: 客户(거래처)与职员(직원)的只读输入模型
// 说明: 这两个集合是组织级主数据,不参与产品组过滤
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Partner - 客户/供应商
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    /// 交易类型标签 (CUSTOMER / SUPPLIER / SUBCONTRACTOR ...)
    #[serde(default)]
    pub partner_type: Vec<String>,
}

// ==========================================
// StaffMember - 职员
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    /// 在职标记,缺失时取上游默认值 true
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_default_active() {
        let staff: StaffMember = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(staff.is_active);

        let retired: StaffMember =
            serde_json::from_str(r#"{"id": 2, "is_active": false}"#).unwrap();
        assert!(!retired.is_active);
    }

    #[test]
    fn test_partner_deserialize() {
        let partner: Partner = serde_json::from_str(
            r#"{"id": 3, "name": "대한정밀", "partner_type": ["CUSTOMER"]}"#,
        )
        .unwrap();
        assert_eq!(partner.name.as_deref(), Some("대한정밀"));
    }
}
