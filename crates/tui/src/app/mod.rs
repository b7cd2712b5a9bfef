use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use engine::{AppendOutcome, ExpenseLog, Store};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    expense_form,
    ui::{self, keymap::AppAction},
};

const TOAST_TTL: Duration = Duration::from_secs(3);
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    AddExpense,
    ViewExpenses,
    ViewTotal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddExpense,
    ViewExpenses,
    ViewTotal,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::AddExpense,
        MenuItem::ViewExpenses,
        MenuItem::ViewTotal,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewExpenses => "View Expenses",
            Self::ViewTotal => "View Total Spending",
            Self::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Amount,
    Category,
}

#[derive(Debug)]
pub struct AddFormState {
    pub amount: String,
    pub category: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl Default for AddFormState {
    fn default() -> Self {
        Self {
            amount: String::new(),
            category: String::new(),
            focus: FormField::Amount,
            error: None,
        }
    }
}

impl AddFormState {
    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Amount => &mut self.amount,
            FormField::Category => &mut self.category,
        }
    }

    fn advance_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Amount => FormField::Category,
            FormField::Category => FormField::Amount,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub log: ExpenseLog,
    pub menu_selected: usize,
    pub form: AddFormState,
    pub list_selected: usize,
    pub toast: Option<ToastState>,
    pub currency_symbol: String,
}

pub struct App {
    store: Store,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, store: Store) -> Self {
        let log = store.load();
        tracing::info!(
            path = %store.path().display(),
            records = log.len(),
            "expenses loaded"
        );

        let state = AppState {
            screen: Screen::MainMenu,
            log,
            menu_selected: 0,
            form: AddFormState::default(),
            list_selected: 0,
            toast: None,
            currency_symbol: config.currency_symbol.clone(),
        };

        Self {
            store,
            state,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit() {
            self.expire_toast(Instant::now());
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.apply(ui::keymap::map_key(key));
    }

    /// Applies one user action to the current screen.
    pub fn apply(&mut self, action: AppAction) {
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.screen {
            Screen::MainMenu => self.apply_menu(action),
            Screen::AddExpense => self.apply_form(action),
            Screen::ViewExpenses => self.apply_list(action),
            Screen::ViewTotal => self.apply_total(action),
        }
    }

    fn show(&mut self, screen: Screen) {
        match screen {
            Screen::AddExpense => {
                self.state.form.error = None;
                self.state.form.focus = FormField::Amount;
            }
            Screen::ViewExpenses => {
                self.state.list_selected = 0;
            }
            Screen::MainMenu | Screen::ViewTotal => {}
        }
        self.state.screen = screen;
    }

    fn apply_menu(&mut self, action: AppAction) {
        let count = MenuItem::ALL.len();
        match action {
            AppAction::Up => {
                self.state.menu_selected = (self.state.menu_selected + count - 1) % count;
            }
            AppAction::Down => {
                self.state.menu_selected = (self.state.menu_selected + 1) % count;
            }
            AppAction::Submit => self.activate(MenuItem::ALL[self.state.menu_selected]),
            AppAction::Input(ch) => match ch {
                '1'..='4' => {
                    let index = ch as usize - '1' as usize;
                    self.state.menu_selected = index;
                    self.activate(MenuItem::ALL[index]);
                }
                'q' | 'Q' => self.should_quit = true,
                'k' => self.apply_menu(AppAction::Up),
                'j' => self.apply_menu(AppAction::Down),
                _ => {}
            },
            _ => {}
        }
    }

    fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::AddExpense => self.show(Screen::AddExpense),
            MenuItem::ViewExpenses => self.show(Screen::ViewExpenses),
            MenuItem::ViewTotal => self.show(Screen::ViewTotal),
            MenuItem::Exit => self.should_quit = true,
        }
    }

    fn apply_form(&mut self, action: AppAction) {
        match action {
            AppAction::Back => {
                self.state.form.error = None;
                self.show(Screen::MainMenu);
            }
            AppAction::NextField | AppAction::Up | AppAction::Down => {
                self.state.form.advance_focus();
            }
            AppAction::Submit => self.submit_expense(),
            AppAction::Backspace => {
                self.state.form.active_field_mut().pop();
            }
            AppAction::Input(ch) => self.state.form.active_field_mut().push(ch),
            _ => {}
        }
    }

    fn submit_expense(&mut self) {
        let input = match expense_form::parse(&self.state.form.amount, &self.state.form.category)
        {
            Ok(input) => input,
            Err(err) => {
                self.state.form.error = Some(err.to_string());
                return;
            }
        };

        let log = std::mem::take(&mut self.state.log);
        let AppendOutcome { log, persisted } =
            self.store.append(log, input.amount, &input.category);
        self.state.log = log;

        match persisted {
            Ok(()) => {
                tracing::info!(records = self.state.log.len(), "expense added");
                self.toast("Expense saved.", ToastLevel::Success);
            }
            Err(err) => {
                tracing::warn!("expense kept in memory only: {err}");
                self.toast(
                    "Save failed: Could not save expenses to disk.",
                    ToastLevel::Warning,
                );
            }
        }

        self.state.form = AddFormState::default();
        self.show(Screen::MainMenu);
    }

    fn apply_list(&mut self, action: AppAction) {
        let last = self.state.log.len().saturating_sub(1);
        match action {
            AppAction::Up => {
                self.state.list_selected = self.state.list_selected.saturating_sub(1);
            }
            AppAction::Down => {
                self.state.list_selected = (self.state.list_selected + 1).min(last);
            }
            AppAction::PageUp => {
                self.state.list_selected = self.state.list_selected.saturating_sub(PAGE_SIZE);
            }
            AppAction::PageDown => {
                self.state.list_selected = (self.state.list_selected + PAGE_SIZE).min(last);
            }
            AppAction::Back | AppAction::Input('b' | 'B') => self.show(Screen::MainMenu),
            AppAction::Input('k') => self.apply_list(AppAction::Up),
            AppAction::Input('j') => self.apply_list(AppAction::Down),
            AppAction::Input('q' | 'Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn apply_total(&mut self, action: AppAction) {
        match action {
            AppAction::Back | AppAction::Submit | AppAction::Input('b' | 'B') => {
                self.show(Screen::MainMenu)
            }
            AppAction::Input('q' | 'Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn toast(&mut self, message: &str, level: ToastLevel) {
        self.state.toast = Some(ToastState {
            message: message.to_string(),
            level,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.state.toast = None;
        }
    }
}
