//! BMI Tools
//!
//! Form input, calculation, and history tools.

use serde::Serialize;

use crate::measurement::{HeightUnit, WeightUnit};
use crate::models::HistoryEntry;
use crate::session::{BmiSession, SessionState};

/// Session plus the transient form it is driven by
pub struct BmiForm {
    pub session: BmiSession,
    pub state: SessionState,
}

impl BmiForm {
    pub fn new(session: BmiSession) -> Self {
        Self {
            session,
            state: SessionState::default(),
        }
    }
}

/// Changes to apply to the form; `None` leaves a field as it is
#[derive(Debug, Default)]
pub struct InputPatch<'a> {
    pub height: Option<&'a str>,
    pub height_unit: Option<&'a str>,
    pub weight: Option<&'a str>,
    pub weight_unit: Option<&'a str>,
    pub age: Option<&'a str>,
    pub gender: Option<&'a str>,
}

/// Current form and result, as rendered
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub height: String,
    pub height_unit: String,
    pub weight: String,
    pub weight_unit: String,
    pub age: String,
    pub gender: String,
    pub bmi: Option<String>,
    pub category: Option<String>,
    pub tip: Option<String>,
    pub warning: Option<String>,
    pub history_entries: usize,
}

impl SessionView {
    fn from_form(form: &BmiForm) -> Self {
        let state = &form.state;
        Self {
            height: state.input.height.clone(),
            height_unit: state.input.height_unit.label().to_string(),
            weight: state.input.weight.clone(),
            weight_unit: state.input.weight_unit.label().to_string(),
            age: state.input.age.clone(),
            gender: state.input.gender.clone(),
            bmi: state.outcome.as_ref().map(|r| r.format_value()),
            category: state.category().map(String::from),
            tip: state.tip().map(String::from),
            warning: state.warning.clone(),
            history_entries: form.session.history().len(),
        }
    }
}

/// Response for calculate
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub bmi: String,
    pub category: String,
    pub tip: String,
    pub warning: Option<String>,
    pub history_entries: usize,
}

/// Response for get_history
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
}

/// Response for clear_history
#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub success: bool,
    pub removed: usize,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Apply input changes to the form
pub fn set_inputs(form: &mut BmiForm, patch: InputPatch<'_>) -> Result<SessionView, String> {
    // Parse units first so a bad unit leaves the form unchanged
    let height_unit = patch
        .height_unit
        .map(|s| HeightUnit::from_str(s).ok_or_else(|| format!("Unknown height unit: '{}'", s)))
        .transpose()?;
    let weight_unit = patch
        .weight_unit
        .map(|s| WeightUnit::from_str(s).ok_or_else(|| format!("Unknown weight unit: '{}'", s)))
        .transpose()?;

    let input = &mut form.state.input;
    if let Some(v) = patch.height {
        input.set_height(v);
    }
    if let Some(unit) = height_unit {
        input.set_height_unit(unit);
    }
    if let Some(v) = patch.weight {
        input.set_weight(v);
    }
    if let Some(unit) = weight_unit {
        input.set_weight_unit(unit);
    }
    if let Some(v) = patch.age {
        input.set_age(v);
    }
    if let Some(v) = patch.gender {
        input.set_gender(v);
    }

    Ok(SessionView::from_form(form))
}

/// Advance the height unit to the next in the cycle
pub fn toggle_height_unit(form: &mut BmiForm) -> SessionView {
    form.state.input.toggle_height_unit();
    SessionView::from_form(form)
}

/// Switch between kilograms and pounds
pub fn toggle_weight_unit(form: &mut BmiForm) -> SessionView {
    form.state.input.toggle_weight_unit();
    SessionView::from_form(form)
}

/// Calculate BMI from the current form and record it
pub fn calculate(form: &mut BmiForm) -> Result<CalculateResponse, String> {
    let next = form
        .session
        .calculate(&form.state)
        .map_err(|e| e.to_string())?;
    form.state = next;

    let result = form
        .state
        .outcome
        .as_ref()
        .ok_or_else(|| "Calculation produced no result".to_string())?;

    Ok(CalculateResponse {
        bmi: result.format_value(),
        category: result.label.clone(),
        tip: result.tip.clone(),
        warning: form.state.warning.clone(),
        history_entries: form.session.history().len(),
    })
}

/// Clear form input and result; history is kept
pub fn reset(form: &mut BmiForm) -> SessionView {
    form.state = form.session.reset();
    SessionView::from_form(form)
}

/// Delete every history entry
pub fn clear_history(form: &mut BmiForm) -> Result<ClearHistoryResponse, String> {
    let removed = form.session.history().len();
    form.session
        .clear_history()
        .map_err(|e| format!("Failed to clear history: {}", e))?;

    Ok(ClearHistoryResponse {
        success: true,
        removed,
    })
}

/// Get the full history in chronological order
pub fn get_history(form: &BmiForm) -> HistoryResponse {
    let entries = form.session.history().to_vec();
    HistoryResponse {
        total: entries.len(),
        entries,
    }
}

/// Get the current form and result
pub fn get_session(form: &BmiForm) -> SessionView {
    SessionView::from_form(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::history::HistoryStore;
    use tempfile::TempDir;

    fn form(dir: &TempDir) -> BmiForm {
        let db = Database::open_migrated(dir.path().join("bmi.db")).unwrap();
        BmiForm::new(BmiSession::new(HistoryStore::open(db).unwrap()))
    }

    #[test]
    fn test_full_flow() {
        let dir = TempDir::new().unwrap();
        let mut form = form(&dir);

        set_inputs(
            &mut form,
            InputPatch {
                height: Some("5"),
                height_unit: Some("ft.in."),
                weight: Some("150"),
                weight_unit: Some("lbs"),
                age: Some("25"),
                gender: Some("female"),
            },
        )
        .unwrap();

        let response = calculate(&mut form).unwrap();
        assert_eq!(response.category, "Obese (Female)");
        assert_eq!(response.history_entries, 1);

        let view = reset(&mut form);
        assert_eq!(view.height, "");
        assert_eq!(view.height_unit, "cm");
        assert_eq!(view.weight_unit, "kg");
        assert!(view.bmi.is_none());
        assert_eq!(view.history_entries, 1);

        let cleared = clear_history(&mut form).unwrap();
        assert_eq!(cleared.removed, 1);
        assert_eq!(get_history(&form).total, 0);
    }

    #[test]
    fn test_bad_unit_leaves_form_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut form = form(&dir);

        let err = set_inputs(
            &mut form,
            InputPatch {
                height: Some("180"),
                height_unit: Some("cubits"),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.contains("cubits"));
        assert_eq!(get_session(&form).height, "");
    }

    #[test]
    fn test_calculate_error_keeps_inputs() {
        let dir = TempDir::new().unwrap();
        let mut form = form(&dir);
        set_inputs(
            &mut form,
            InputPatch {
                height: Some("180"),
                weight: Some("80"),
                age: Some("30"),
                ..Default::default()
            },
        )
        .unwrap();

        let err = calculate(&mut form).unwrap_err();
        assert_eq!(err, "Invalid input! Gender must be selected.");
        assert_eq!(get_session(&form).height, "180");
        assert_eq!(get_history(&form).total, 0);
    }

    #[test]
    fn test_toggles_report_labels() {
        let dir = TempDir::new().unwrap();
        let mut form = form(&dir);
        assert_eq!(toggle_height_unit(&mut form).height_unit, "m");
        assert_eq!(toggle_height_unit(&mut form).height_unit, "ft.in.");
        assert_eq!(toggle_weight_unit(&mut form).weight_unit, "lbs");
    }
}
