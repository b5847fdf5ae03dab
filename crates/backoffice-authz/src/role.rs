use crate::AuthzError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ComplianceOfficer,
    OperationsManager,
    SupportAgent,
    ProductManager,
    RiskAnalyst,
    Auditor,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::ComplianceOfficer,
        Role::OperationsManager,
        Role::SupportAgent,
        Role::ProductManager,
        Role::RiskAnalyst,
        Role::Auditor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ComplianceOfficer => "compliance_officer",
            Role::OperationsManager => "operations_manager",
            Role::SupportAgent => "support_agent",
            Role::ProductManager => "product_manager",
            Role::RiskAnalyst => "risk_analyst",
            Role::Auditor => "auditor",
        }
    }

    /// Label shown next to the user in the dashboard header.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::ComplianceOfficer => "Oficial de Cumplimiento",
            Role::OperationsManager => "Gerente de Operaciones",
            Role::SupportAgent => "Agente de Soporte",
            Role::ProductManager => "Gerente de Producto",
            Role::RiskAnalyst => "Analista de Riesgos",
            Role::Auditor => "Auditor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AuthzError::InvalidRole(value.to_string()))
    }
}
