use crate::domain::model::SolverResult;
use crate::domain::ports::Presenter;
use crate::utils::error::FormError;

/// Terminal rendering of solver outcomes. The "result region" of the
/// original page becomes a printed block; `result_visible` tracks whether
/// one is currently on screen so reset can report it cleanly.
pub struct ConsolePresenter {
    result_visible: bool,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self {
            result_visible: false,
        }
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for ConsolePresenter {
    fn show_result(&mut self, result: &SolverResult) {
        println!();
        println!("📊 Optimization result");
        println!("   Selected projects: {}", format_selected(&result.selected_names));
        println!("   Total profit:      {}", format_grouped(result.total_profit));
        println!("   Total cost:        {}", format_grouped(result.total_cost));
        println!();

        self.result_visible = true;
    }

    fn show_error(&mut self, error: &FormError) {
        // The blocking alert of the original: the message lands on stderr
        // before the prompt comes back. A previous result stays on screen.
        eprintln!("❌ {}", error);
    }

    fn hide_result(&mut self) {
        self.result_visible = false;
    }
}

/// The selection line: joined names, or an explicit marker when the solver
/// picked nothing, so an empty answer never reads like a blank.
pub fn format_selected(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

/// Thousands grouping, the `toLocaleString()` of the terminal.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
