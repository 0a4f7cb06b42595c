use dialoguer::{theme::ColorfulTheme, Input, Select};
use eyre::{eyre, Context, Result};

/// Asks the user to pick one of `items`, `None` when the prompt is cancelled with Esc or q.
pub fn user_select<S: ToString>(prompt: &str, items: &[S]) -> Result<Option<usize>> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))
}

pub fn user_input(prompt: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}
