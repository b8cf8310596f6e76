use crate::log::init_logger;
use crate::scanner::MatchRecord;
use crate::solver::{solve_text, SolverError};
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G001", "S001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // report the underlying grid error, which carries the useful detail
        match &e {
            SolverError::InvalidGrid(ge) => WasmError {
                code: ge.code().to_string(),
                message: ge.to_string(),
                description: ge.description().to_string(),
                details: ge.details().to_string(),
                help: ge.help().map(|s| s.to_string()),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// One match, flattened for JavaScript.
#[derive(serde::Serialize)]
struct WasmMatch {
    word: String,
    row: usize,
    col: usize,
    code: &'static str,
    name: &'static str,
}

impl From<&MatchRecord> for WasmMatch {
    fn from(m: &MatchRecord) -> Self {
        WasmMatch {
            word: m.word.clone(),
            row: m.row,
            col: m.col,
            code: m.direction.code(),
            name: m.direction.name(),
        }
    }
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    matches: Vec<WasmMatch>,
    missing_words: Vec<String>,
    report: String,
}

/// JS entry: (grid_text: string, word_text: string)
/// returns { matches: {word,row,col,code,name}[], missing_words: string[], report: string }
#[wasm_bindgen]
pub fn solve_puzzle_wasm(grid_text: &str, word_text: &str) -> Result<JsValue, JsValue> {
    let result = solve_text(grid_text, word_text).map_err(WasmError::from)?;

    let wasm_result = WasmSolveResult {
        matches: result.matches.iter().map(WasmMatch::from).collect(),
        report: crate::report::render_report(&result.matches),
        missing_words: result.missing_words,
    };

    serde_wasm_bindgen::to_value(&wasm_result).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The solver result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Generate a debug report that users can copy/paste when reporting issues.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, grid_height: usize, grid_width: usize, num_words: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDSEARCH DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH_FULL"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Grid: {} rows x {} columns", grid_height, grid_width);
    let _ = writeln!(&mut report, "Words: {}", num_words);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
