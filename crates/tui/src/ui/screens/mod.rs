pub mod add_expense;
pub mod expenses;
pub mod menu;
pub mod total;
