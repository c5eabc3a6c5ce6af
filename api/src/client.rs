//! Endpoint catalog.
//!
//! ARCHITECTURE
//! ============
//! [`ApiClient`] is built from an [`ApiConfig`] and a clone of the session's
//! [`Credentials`]. Each method returns an [`ApiRequest`] whose
//! `Authorization` value is read from the credentials at build time, so a
//! request built after `logout` carries no token even if the client value
//! itself outlived the session.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use session::{Credentials, Role};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::request::{ApiRequest, Method};
use crate::types::{
    CustomerInput, FeeInput, InstallmentPayment, LoginCredentials, ProcessInput, UserInput,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    credentials: Credentials,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, credentials: Credentials) -> Self {
        Self { config, credentials }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest {
            method,
            url: self.config.url(path),
            query: Vec::new(),
            body: None,
            authorization: self.credentials.authorization_header(),
        }
    }

    fn with_body<T: Serialize>(&self, method: Method, path: &str, body: &T) -> Result<ApiRequest, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(ApiRequest { body: Some(body), ..self.request(method, path) })
    }

    fn paged(&self, path: &str, page: u32, limit: u32) -> ApiRequest {
        ApiRequest {
            query: vec![("page", page.max(1).to_string()), ("limit", limit.max(1).to_string())],
            ..self.request(Method::Get, path)
        }
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn login(&self, credentials: &LoginCredentials) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Post, "auth/login", credentials)
    }

    // =========================================================================
    // CUSTOMERS
    // =========================================================================

    #[must_use]
    pub fn customers(&self, page: u32, limit: u32) -> ApiRequest {
        self.paged("cliente", page, limit)
    }

    /// Every customer, for select inputs.
    #[must_use]
    pub fn all_customers(&self) -> ApiRequest {
        self.request(Method::Get, "cliente")
    }

    #[must_use]
    pub fn customer(&self, id: &str) -> ApiRequest {
        self.request(Method::Get, &format!("cliente/{id}"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn create_customer(&self, input: &CustomerInput) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Post, "cliente", input)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn update_customer(&self, id: &str, input: &CustomerInput) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Patch, &format!("cliente/{id}"), input)
    }

    #[must_use]
    pub fn delete_customer(&self, id: &str) -> ApiRequest {
        self.request(Method::Delete, &format!("cliente/{id}"))
    }

    #[must_use]
    pub fn offices(&self) -> ApiRequest {
        self.request(Method::Get, "escritorios")
    }

    // =========================================================================
    // PROCESSES
    // =========================================================================

    #[must_use]
    pub fn processes(&self, page: u32, limit: u32) -> ApiRequest {
        self.paged("processo", page, limit)
    }

    /// Unpaged process references for fee forms.
    #[must_use]
    pub fn process_options(&self) -> ApiRequest {
        self.request(Method::Get, "processo/list")
    }

    #[must_use]
    pub fn process(&self, id: &str) -> ApiRequest {
        self.request(Method::Get, &format!("processo/{id}"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn create_process(&self, input: &ProcessInput) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Post, "processo", input)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn update_process(&self, id: &str, input: &ProcessInput) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Patch, &format!("processo/{id}"), input)
    }

    #[must_use]
    pub fn delete_process(&self, id: &str) -> ApiRequest {
        self.request(Method::Delete, &format!("processo/{id}"))
    }

    #[must_use]
    pub fn process_types(&self) -> ApiRequest {
        self.request(Method::Get, "processo/tipo")
    }

    // =========================================================================
    // FEES
    // =========================================================================

    #[must_use]
    pub fn fees(&self) -> ApiRequest {
        self.request(Method::Get, "honorario")
    }

    #[must_use]
    pub fn fee(&self, id: &str) -> ApiRequest {
        self.request(Method::Get, &format!("honorario/{id}"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn create_fee(&self, input: &FeeInput) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Post, "honorario", input)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn update_fee(&self, id: &str, input: &FeeInput) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Patch, &format!("honorario/{id}"), input)
    }

    #[must_use]
    pub fn delete_fee(&self, id: &str) -> ApiRequest {
        self.request(Method::Delete, &format!("honorario/{id}"))
    }

    /// Mark one installment as received on `received_on` (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn mark_installment_paid(&self, installment_id: &str, received_on: &str) -> Result<ApiRequest, ApiError> {
        let body = InstallmentPayment { received_on: received_on.to_owned() };
        self.with_body(Method::Patch, &format!("honorario/parcela/{installment_id}/pagar"), &body)
    }

    // =========================================================================
    // USERS
    // =========================================================================

    #[must_use]
    pub fn users(&self) -> ApiRequest {
        self.request(Method::Get, "users")
    }

    /// Users holding `role`, e.g. lawyers for the process form.
    #[must_use]
    pub fn users_with_role(&self, role: Role) -> ApiRequest {
        ApiRequest { query: vec![("role", role.as_str().to_owned())], ..self.users() }
    }

    #[must_use]
    pub fn user(&self, id: &str) -> ApiRequest {
        self.request(Method::Get, &format!("users/{id}"))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn create_user(&self, input: &UserInput) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Post, "users", input)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn update_user(&self, id: &str, input: &UserInput) -> Result<ApiRequest, ApiError> {
        self.with_body(Method::Patch, &format!("users/{id}"), input)
    }

    // =========================================================================
    // DASHBOARD
    // =========================================================================

    /// Monthly fee totals and pending installments.
    #[must_use]
    pub fn financial_summary(&self, month: u32, year: i32) -> ApiRequest {
        ApiRequest {
            query: vec![("month", month.to_string()), ("year", year.to_string())],
            ..self.request(Method::Get, "dashboard/financeiro")
        }
    }
}
