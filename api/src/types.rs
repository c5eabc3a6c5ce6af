//! Request and response records for each backend resource.
//!
//! DESIGN
//! ======
//! Field names are English; `serde` renames map them to the backend's
//! Portuguese wire names. Monetary amounts arrive as either JSON numbers or
//! numeric strings depending on the endpoint, so they go through
//! [`deserialize_money`]. Optional wire fields default instead of failing, but
//! a wrong type on a required field rejects the whole record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

pub use session::{Role, User};

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Successful `POST auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// A law office (`escritorios`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub id: String,
    #[serde(rename = "nome", default)]
    pub name: String,
}

/// A process category (`processo/tipo`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessType {
    pub id: String,
    #[serde(rename = "nome", default)]
    pub name: String,
}

// =============================================================================
// CUSTOMERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "escritorioId", default)]
    pub office_id: Option<String>,
    #[serde(rename = "escritorio", default)]
    pub office: Option<Office>,
}

impl Customer {
    /// Office id from either the flat field or the nested record.
    #[must_use]
    pub fn office_id(&self) -> Option<&str> {
        self.office_id.as_deref().or_else(|| self.office.as_ref().map(|o| o.id.as_str()))
    }
}

/// Body of `POST cliente` and `PATCH cliente/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CustomerInput {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "escritorioId")]
    pub office_id: String,
}

impl From<&Customer> for CustomerInput {
    fn from(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone().unwrap_or_default(),
            phone: c.phone.clone().unwrap_or_default(),
            office_id: c.office_id().unwrap_or_default().to_owned(),
        }
    }
}

// =============================================================================
// PROCESSES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessStatus {
    #[default]
    #[serde(rename = "EM_ANDAMENTO")]
    InProgress,
    #[serde(rename = "ENCERRADO")]
    Closed,
}

impl ProcessStatus {
    pub const ALL: [Self; 2] = [Self::InProgress, Self::Closed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "EM_ANDAMENTO",
            Self::Closed => "ENCERRADO",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "Em Andamento",
            Self::Closed => "Encerrado",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// A lawyer assigned to a process, with their share of the fees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "percentualParticipacao", default, deserialize_with = "deserialize_opt_money")]
    pub participation: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub id: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "tipo", default)]
    pub kind: Option<ProcessType>,
    #[serde(rename = "advogados", default)]
    pub lawyers: Vec<Lawyer>,
    #[serde(rename = "cliente", default)]
    pub customer: Option<Customer>,
    #[serde(rename = "escritorio", default)]
    pub office: Option<Office>,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "valorCausa", default, deserialize_with = "deserialize_money")]
    pub claim_value: f64,
    #[serde(default)]
    pub status: ProcessStatus,
    #[serde(rename = "dataInicio", default)]
    pub started_on: Option<String>,
    #[serde(rename = "dataEncerramento", default)]
    pub closed_on: Option<String>,
}

/// Minimal process reference used by fee forms (`processo/list`) and nested
/// inside fees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRef {
    pub id: String,
    #[serde(rename = "numero", default)]
    pub number: String,
}

/// Body of `POST processo` and `PATCH processo/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProcessInput {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "tipoId")]
    pub type_id: String,
    #[serde(rename = "advogadoId")]
    pub lawyer_id: String,
    #[serde(rename = "escritorioId")]
    pub office_id: String,
    #[serde(rename = "clienteId")]
    pub customer_id: String,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Sent as a two-decimal string.
    #[serde(rename = "valorCausa", serialize_with = "serialize_money_string")]
    pub claim_value: f64,
    #[serde(rename = "percentualParticipacao")]
    pub participation: f64,
    pub status: ProcessStatus,
    #[serde(rename = "dataInicio")]
    pub started_on: String,
    #[serde(rename = "dataEncerramento", skip_serializing_if = "Option::is_none")]
    pub closed_on: Option<String>,
}

impl From<&Process> for ProcessInput {
    fn from(p: &Process) -> Self {
        let lead = p.lawyers.first();
        Self {
            number: p.number.clone(),
            type_id: p.kind.as_ref().map(|k| k.id.clone()).unwrap_or_default(),
            lawyer_id: lead.map(|l| l.id.clone()).unwrap_or_default(),
            office_id: p.office.as_ref().map(|o| o.id.clone()).unwrap_or_default(),
            customer_id: p.customer.as_ref().map(|c| c.id.clone()).unwrap_or_default(),
            description: p.description.clone(),
            claim_value: p.claim_value,
            participation: lead.and_then(|l| l.participation).unwrap_or_default(),
            status: p.status,
            started_on: p.started_on.as_deref().map(date_part).unwrap_or_default(),
            closed_on: p.closed_on.as_deref().map(date_part),
        }
    }
}

// =============================================================================
// FEES
// =============================================================================

/// One installment of a fee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub id: String,
    #[serde(rename = "numero", default)]
    pub number: Option<u32>,
    #[serde(rename = "valor", default, deserialize_with = "deserialize_money")]
    pub amount: f64,
    #[serde(rename = "dataVencimento", alias = "dataPrevistaRecebimento", default)]
    pub due_on: Option<String>,
    #[serde(rename = "dataRecebido", default)]
    pub received_on: Option<String>,
    #[serde(rename = "recebido", alias = "pago", default)]
    pub paid: bool,
}

/// A fee (`honorario`) owed on a process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub id: String,
    #[serde(rename = "processo", default)]
    pub process: Option<ProcessRef>,
    #[serde(rename = "processoId", default)]
    pub process_id: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "valor", default, deserialize_with = "deserialize_money")]
    pub amount: f64,
    #[serde(rename = "dataPrevistaRecebimento", default)]
    pub due_on: Option<String>,
    #[serde(rename = "dataRecebido", default)]
    pub received_on: Option<String>,
    #[serde(rename = "recebido", default)]
    pub received: bool,
    #[serde(rename = "parcelas", default)]
    pub installments: Vec<Installment>,
}

impl Fee {
    /// Process id from either the flat field or the nested record.
    #[must_use]
    pub fn process_id(&self) -> Option<&str> {
        self.process_id.as_deref().or_else(|| self.process.as_ref().map(|p| p.id.as_str()))
    }

    #[must_use]
    pub fn process_number(&self) -> &str {
        self.process.as_ref().map_or("", |p| p.number.as_str())
    }
}

/// Body of `POST honorario` and `PATCH honorario/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeeInput {
    #[serde(rename = "processoId")]
    pub process_id: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "dataPrevistaRecebimento")]
    pub due_on: String,
    #[serde(rename = "dataRecebido", skip_serializing_if = "Option::is_none")]
    pub received_on: Option<String>,
    #[serde(rename = "recebido")]
    pub received: bool,
    #[serde(rename = "nrParcelas", skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
}

impl From<&Fee> for FeeInput {
    fn from(f: &Fee) -> Self {
        Self {
            process_id: f.process_id().unwrap_or_default().to_owned(),
            description: f.description.clone(),
            amount: f.amount,
            due_on: f.due_on.as_deref().map(date_part).unwrap_or_default(),
            received_on: f.received_on.as_deref().map(date_part),
            received: f.received,
            installment_count: u32::try_from(f.installments.len()).ok().filter(|n| *n > 0),
        }
    }
}

/// Body of the mark-installment-paid call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstallmentPayment {
    #[serde(rename = "dataRecebido")]
    pub received_on: String,
}

// =============================================================================
// USERS
// =============================================================================

/// A user as listed on the admin screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Body of `POST users` and `PATCH users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserInput {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    /// Omitted on update to keep the current password.
    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// An installment due in the selected month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingInstallment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "processoNumero", default)]
    pub process_number: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "valor", deserialize_with = "deserialize_money")]
    pub amount: f64,
    #[serde(rename = "dataPrevistaRecebimento", default)]
    pub due_on: Option<String>,
}

/// Monthly totals from `dashboard/financeiro`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    #[serde(rename = "totalHonorariosPrevistos", default, deserialize_with = "deserialize_money")]
    pub expected_total: f64,
    #[serde(rename = "totalHonorariosRecebidos", default, deserialize_with = "deserialize_money")]
    pub received_total: f64,
    #[serde(rename = "parcelasPendentes", default)]
    pub pending: Vec<PendingInstallment>,
}

// =============================================================================
// WIRE HELPERS
// =============================================================================

/// `YYYY-MM-DD` prefix of an ISO timestamp, for date inputs.
#[must_use]
pub fn date_part(raw: &str) -> String {
    raw.split('T').next().unwrap_or(raw).to_owned()
}

fn money_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<Option<f64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| E::custom("amount out of range")),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Some)
                .ok_or_else(|| E::custom(format!("invalid amount: {s}")))
        }
        _ => Err(E::custom("expected amount as number or string")),
    }
}

fn deserialize_money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(money_from_value::<D::Error>(&value)?.unwrap_or_default())
}

fn deserialize_opt_money<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    money_from_value::<D::Error>(&value)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_money_string<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("{value:.2}"))
}
