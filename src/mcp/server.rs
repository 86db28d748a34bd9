//! BMI Tracker MCP Server Implementation
//!
//! Exposes the BMI form, calculation, and history as MCP tools.

use std::path::PathBuf;
use std::sync::{Arc, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::session::BmiSession;
use crate::tools::bmi::{self, BmiForm, InputPatch};
use crate::tools::status::StatusTracker;

/// BMI Tracker MCP Service
#[derive(Clone)]
pub struct BmiService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    /// Form and session; every tool call runs to completion under this lock
    form: Arc<std::sync::Mutex<BmiForm>>,
    tool_router: ToolRouter<BmiService>,
}

impl BmiService {
    pub fn new(database_path: PathBuf, session: BmiSession) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            form: Arc::new(std::sync::Mutex::new(BmiForm::new(session))),
            tool_router: Self::tool_router(),
        }
    }

    fn lock_form(&self) -> Result<MutexGuard<'_, BmiForm>, McpError> {
        self.form
            .lock()
            .map_err(|_| McpError::internal_error("BMI form state is unavailable", None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetValueParams {
    /// Value exactly as typed, e.g. "180" or "72.5"
    pub value: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetGenderParams {
    /// "male" or "female"
    pub gender: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetInputsParams {
    /// Height as typed (optional)
    pub height: Option<String>,
    /// Height unit: "cm", "m" or "ft.in." (decimal feet) (optional)
    pub height_unit: Option<String>,
    /// Weight as typed (optional)
    pub weight: Option<String>,
    /// Weight unit: "kg" or "lbs" (optional)
    pub weight_unit: Option<String>,
    /// Age in years (optional)
    pub age: Option<String>,
    /// "male" or "female" (optional)
    pub gender: Option<String>,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl BmiService {
    // --- Status ---

    #[tool(description = "Get the current status of the BMI tracker including build info, database status, history size, and process information")]
    async fn bmi_status(&self) -> Result<CallToolResult, McpError> {
        let history_entries = self.lock_form()?.session.history().len();
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status(history_entries))
    }

    // --- Form Input ---

    #[tool(description = "Set the height field")]
    fn set_height(&self, Parameters(p): Parameters<SetValueParams>) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        let patch = InputPatch { height: Some(p.value.as_str()), ..Default::default() };
        let view = bmi::set_inputs(&mut form, patch).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Set the weight field")]
    fn set_weight(&self, Parameters(p): Parameters<SetValueParams>) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        let patch = InputPatch { weight: Some(p.value.as_str()), ..Default::default() };
        let view = bmi::set_inputs(&mut form, patch).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Set the age field")]
    fn set_age(&self, Parameters(p): Parameters<SetValueParams>) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        let patch = InputPatch { age: Some(p.value.as_str()), ..Default::default() };
        let view = bmi::set_inputs(&mut form, patch).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Select gender (male or female); picks the threshold ladder used for classification")]
    fn set_gender(&self, Parameters(p): Parameters<SetGenderParams>) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        let patch = InputPatch { gender: Some(p.gender.as_str()), ..Default::default() };
        let view = bmi::set_inputs(&mut form, patch).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Set any of height, weight, age, gender and the two units in one call. Omitted fields are left unchanged.")]
    fn set_inputs(&self, Parameters(p): Parameters<SetInputsParams>) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        let patch = InputPatch {
            height: p.height.as_deref(),
            height_unit: p.height_unit.as_deref(),
            weight: p.weight.as_deref(),
            weight_unit: p.weight_unit.as_deref(),
            age: p.age.as_deref(),
            gender: p.gender.as_deref(),
        };
        let view = bmi::set_inputs(&mut form, patch).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Cycle the height unit: cm -> m -> ft.in. -> cm. ft.in. takes a single decimal number of feet.")]
    fn toggle_height_unit(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        json_result(&bmi::toggle_height_unit(&mut form))
    }

    #[tool(description = "Switch the weight unit between kg and lbs")]
    fn toggle_weight_unit(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        json_result(&bmi::toggle_weight_unit(&mut form))
    }

    // --- Actions ---

    #[tool(description = "Calculate BMI from the current inputs, classify it, and append it to history. Fails without changes if any input is missing or not positive.")]
    fn calculate(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        let result = bmi::calculate(&mut form).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Clear inputs and the displayed result. History is kept.")]
    fn reset(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        json_result(&bmi::reset(&mut form))
    }

    #[tool(description = "Delete all BMI history entries")]
    fn clear_history(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        let result = bmi::clear_history(&mut form).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Views ---

    #[tool(description = "Get all BMI history entries, oldest first")]
    fn get_history(&self) -> Result<CallToolResult, McpError> {
        let form = self.lock_form()?;
        json_result(&bmi::get_history(&form))
    }

    #[tool(description = "Get the current inputs, units, BMI, category, and tip")]
    fn get_session(&self) -> Result<CallToolResult, McpError> {
        let form = self.lock_form()?;
        json_result(&bmi::get_session(&form))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for BmiService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bmi-tracker".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("BMI Tracker".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "BMI Tracker - body mass index calculation with history. \
                 Inputs: set_height/set_weight/set_age/set_gender or set_inputs, \
                 toggle_height_unit (cm, m, ft.in.), toggle_weight_unit (kg, lbs). \
                 Actions: calculate (records history), reset (keeps history), clear_history. \
                 Views: get_session, get_history, bmi_status."
                    .into(),
            ),
        }
    }
}
