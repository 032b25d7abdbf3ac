use std::{path::PathBuf, time::Duration};

use crossterm::event::{self, Event, KeyEvent};
use engine::{Ledger, Store};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    form::{ExpenseForm, FormField},
    ui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Expenses,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Expenses => "Expenses",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Add,
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub mode: Mode,
    pub form: ExpenseForm,
    /// Selected row in the expenses table.
    pub selected: usize,
    /// One-line feedback shown in the bottom bar.
    pub status: Option<String>,
    pub store_label: String,
}

pub struct App {
    ledger: Ledger,
    pub state: AppState,
    export_path: PathBuf,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = if config.memory {
            Store::Memory
        } else {
            Store::csv(&config.data_file)
        };
        let store_label = if config.memory {
            "memory (not persisted)".to_string()
        } else {
            config.data_file.clone()
        };
        let export_path = PathBuf::from(&config.data_file).with_extension("export.csv");

        let ledger = Ledger::open(store)?;
        let state = AppState {
            section: Section::Overview,
            mode: Mode::Browse,
            form: ExpenseForm::new(chrono::Local::now().date_naive()),
            selected: 0,
            status: None,
            store_label,
        };

        Ok(Self {
            ledger,
            state,
            export_path,
            should_quit: false,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state, &self.ledger))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let action = ui::keymap::map_key(key);

        if action == ui::keymap::AppAction::Quit {
            self.should_quit = true;
            return Ok(());
        }

        match self.state.mode {
            Mode::Add => self.handle_form_key(action),
            Mode::Browse => self.handle_browse_key(action),
        }
    }

    fn handle_form_key(&mut self, action: ui::keymap::AppAction) -> Result<()> {
        use crate::ui::keymap::AppAction;

        match action {
            AppAction::Cancel => {
                self.state.mode = Mode::Browse;
                self.state.status = None;
            }
            AppAction::NextField => self.state.form.advance_focus(),
            AppAction::Submit => self.submit_form(),
            AppAction::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop();
                }
            }
            AppAction::Up => {
                if self.state.form.focus == FormField::Category {
                    self.state.form.cycle_category_prev();
                }
            }
            AppAction::Down => {
                if self.state.form.focus == FormField::Category {
                    self.state.form.cycle_category_next();
                }
            }
            AppAction::Input(ch) => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push(ch);
                } else if ch == ' ' {
                    self.state.form.cycle_category_next();
                }
            }
            AppAction::Quit | AppAction::None => {}
        }

        Ok(())
    }

    fn handle_browse_key(&mut self, action: ui::keymap::AppAction) -> Result<()> {
        use crate::ui::keymap::AppAction;

        match action {
            AppAction::Up => self.select_prev(),
            AppAction::Down => self.select_next(),
            AppAction::Input(ch) => self.handle_browse_char(ch)?,
            _ => {}
        }

        Ok(())
    }

    fn handle_browse_char(&mut self, ch: char) -> Result<()> {
        match ch {
            'q' | 'Q' => self.should_quit = true,
            'o' | 'O' => self.state.section = Section::Overview,
            'e' | 'E' => self.state.section = Section::Expenses,
            'a' | 'A' => {
                self.state.form = ExpenseForm::new(chrono::Local::now().date_naive());
                self.state.mode = Mode::Add;
                self.state.status = None;
            }
            'j' | 'J' => self.select_next(),
            'k' | 'K' => self.select_prev(),
            // Row mutation keys only apply where the rows (and the key
            // hints) are on screen.
            'd' | 'D' => {
                if self.state.section == Section::Expenses {
                    self.delete_selected();
                }
            }
            'C' => {
                if self.state.section == Section::Expenses {
                    self.clear_all();
                }
            }
            'x' | 'X' => self.export(),
            _ => {}
        }
        Ok(())
    }

    fn select_next(&mut self) {
        if self.ledger.is_empty() {
            return;
        }
        self.state.selected = (self.state.selected + 1).min(self.ledger.len() - 1);
    }

    fn select_prev(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    fn submit_form(&mut self) {
        let submission = match self.state.form.parse() {
            Ok(submission) => submission,
            Err(message) => {
                self.state.form.message = Some(message);
                return;
            }
        };

        match self.ledger.add(submission) {
            Ok(index) => {
                let expense = &self.ledger.expenses()[index];
                self.state.status = Some(format!(
                    "Added {} ({})",
                    expense.description, expense.amount
                ));
                self.state.selected = index;
                self.state.section = Section::Expenses;
                self.state.mode = Mode::Browse;
            }
            Err(err) => {
                self.state.form.message = Some(err.to_string());
            }
        }
    }

    fn delete_selected(&mut self) {
        if self.ledger.is_empty() {
            self.state.status = Some("Nothing to delete.".to_string());
            return;
        }

        match self.ledger.remove(self.state.selected) {
            Ok(removed) => {
                self.state.status = Some(format!(
                    "Deleted {} ({})",
                    removed.description, removed.amount
                ));
                if self.state.selected >= self.ledger.len() && self.state.selected > 0 {
                    self.state.selected -= 1;
                }
            }
            Err(err) => {
                self.state.status = Some(err.to_string());
            }
        }
    }

    fn clear_all(&mut self) {
        match self.ledger.clear() {
            Ok(removed) => {
                self.state.selected = 0;
                self.state.status = Some(format!("Cleared {removed} expenses."));
            }
            Err(err) => {
                self.state.status = Some(err.to_string());
            }
        }
    }

    fn export(&mut self) {
        let result = self
            .ledger
            .export_csv()
            .map_err(AppError::from)
            .and_then(|data| std::fs::write(&self.export_path, data).map_err(AppError::from));

        self.state.status = Some(match result {
            Ok(()) => format!("Exported to {}", self.export_path.display()),
            Err(err) => format!("Export failed: {err}"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_app() -> App {
        App::new(AppConfig {
            data_file: "unused.csv".to_string(),
            memory: true,
        })
        .unwrap()
    }

    fn add_sample(app: &mut App) {
        app.ledger
            .add(engine::NewExpense {
                date: chrono::NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
                category: engine::Category::Food,
                description: "chai".to_string(),
                amount: engine::Money::new(2000),
            })
            .unwrap();
    }

    #[test]
    fn delete_only_acts_in_the_expenses_section() {
        let mut app = memory_app();
        add_sample(&mut app);

        app.state.section = Section::Overview;
        app.handle_browse_char('d').unwrap();
        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.state.status, None);

        app.state.section = Section::Expenses;
        app.handle_browse_char('d').unwrap();
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn clear_only_acts_in_the_expenses_section() {
        let mut app = memory_app();
        add_sample(&mut app);

        app.state.section = Section::Overview;
        app.handle_browse_char('C').unwrap();
        assert_eq!(app.ledger.len(), 1);

        app.state.section = Section::Expenses;
        app.handle_browse_char('C').unwrap();
        assert!(app.ledger.is_empty());
    }
}
