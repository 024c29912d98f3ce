//! Request, response and form models for the analysis exchange.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::{
    BYTECODE_CODE_ID, BYTECODE_INPUT_ID, BYTECODE_LABEL_ID, FIELD_CODE, FIELD_INPUT, FIELD_NAME,
    FIELD_TYPE, SOLIDITY_CODE_ID, SOLIDITY_INPUT_ID, SOLIDITY_LABEL_ID,
};
use crate::error_handling::AnalysisError;

/// Analysis target.
///
/// The lowercase name is what travels in the `type` field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Solidity source, compiled by the service before analysis
    Solidity,
    /// Runtime bytecode as hex
    Bytecode,
}

impl Mode {
    /// Identifier of the element holding the code for this mode.
    pub fn code_element_id(&self) -> &'static str {
        match self {
            Mode::Solidity => SOLIDITY_CODE_ID,
            Mode::Bytecode => BYTECODE_CODE_ID,
        }
    }

    /// Identifier of the element holding the call data for this mode.
    pub fn input_element_id(&self) -> &'static str {
        match self {
            Mode::Solidity => SOLIDITY_INPUT_ID,
            Mode::Bytecode => BYTECODE_INPUT_ID,
        }
    }

    /// Identifier of the status label tied to this mode's submit control.
    pub fn label_element_id(&self) -> &'static str {
        match self {
            Mode::Solidity => SOLIDITY_LABEL_ID,
            Mode::Bytecode => BYTECODE_LABEL_ID,
        }
    }
}

/// One analysis submission.
///
/// Values are forwarded verbatim: no trimming, no hex checks, no size limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub mode: Mode,
    pub code: String,
    pub input: String,
    /// Sent as `name` when set; the service uses it to pick the compiled contract.
    pub contract_name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(mode: Mode, code: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            mode,
            code: code.into(),
            input: input.into(),
            contract_name: None,
        }
    }

    pub fn with_contract_name(mut self, name: impl Into<String>) -> Self {
        self.contract_name = Some(name.into());
        self
    }

    /// Reads the code and input fields for `mode` from the form.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MissingElement` naming the first absent element.
    pub fn from_form(mode: Mode, form: &AnalysisForm) -> Result<Self, AnalysisError> {
        let code = form.value(mode.code_element_id())?;
        let input = form.value(mode.input_element_id())?;
        Ok(Self::new(mode, code, input))
    }

    /// Multipart fields in submission order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (FIELD_TYPE, self.mode.to_string()),
            (FIELD_CODE, self.code.clone()),
            (FIELD_INPUT, self.input.clone()),
        ];
        if let Some(name) = &self.contract_name {
            fields.push((FIELD_NAME, name.clone()));
        }
        fields
    }
}

/// Decoded body of a 200 answer.
///
/// Older services send only `data`. Newer ones add `title` and `color` along
/// with the `code`/`status` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Report body; may contain markup and raw newlines
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// CSS color value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// 0 on success, 1 on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// `"success"` or `"fail"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AnalysisResponse {
    /// Decodes a response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Whether the colored report template applies.
    pub fn is_report(&self) -> bool {
        self.color.is_some()
    }

    /// Whether the service flagged the analysis itself as failed
    /// (a Solidity compile error, for instance). Such answers still render.
    pub fn is_failure(&self) -> bool {
        self.code == Some(1) || self.status.as_deref() == Some("fail")
    }
}

/// Values of the page's input elements, keyed by element identifier.
#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    fields: HashMap<String, String>,
}

impl AnalysisForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form holding the code and input elements of `mode`.
    pub fn for_mode(mode: Mode, code: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new()
            .with_field(mode.code_element_id(), code)
            .with_field(mode.input_element_id(), input)
    }

    pub fn with_field(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(id.into(), value.into());
    }

    /// Current value of element `id`.
    pub fn value(&self, id: &str) -> Result<&str, AnalysisError> {
        self.fields
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| AnalysisError::MissingElement(id.to_string()))
    }
}
