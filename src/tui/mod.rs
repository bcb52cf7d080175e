//! Interactive form.

mod form;
mod input;
mod text;

use std::io;
use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::info;

use crate::cli::{Args, prompts};
use crate::terminal::{clear, reset_terminal};
use form::{Form, Status};
use input::{get_editable_input, get_numeric_input};
use text::{enter_prompt, print_about, print_form, print_help};

use LoopAction::*;
enum LoopAction {
    Break,
    Continue,
}

/// Run TUI interactive mode, starting from the settings in `args`.
pub fn run(args: &Args) -> ExitCode {
    reset_terminal();
    clear();
    // Warnings go to the status line instead of stderr
    prompts::set_quiet(true);

    let mut form = Form::from_args(args);
    let mut clipboard: Option<ClipboardContext> = None;
    if form.status == Status::Idle {
        form.generate();
    }

    match menu_loop(&mut form, &mut clipboard, get_editable_input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reset_terminal();
            info!(error = %e, "terminal input failed");
            prompts::error(&format!("Terminal error: {e}"));
            ExitCode::FAILURE
        }
    }
}

/// Draw, prompt, act until quit. A prompt error ends the loop.
fn menu_loop<P>(
    form: &mut Form,
    clipboard: &mut Option<ClipboardContext>,
    mut prompt: P,
) -> io::Result<()>
where
    P: FnMut(&str, &str) -> io::Result<Option<String>>,
{
    loop {
        print_form(form);
        form.settle();

        let Some(input) = prompt(enter_prompt(), "")? else {
            clear();
            continue;
        };

        clear();
        if let Break = handle(input.trim(), form, clipboard)? {
            return Ok(());
        }
    }
}

fn handle(
    choice: &str,
    form: &mut Form,
    clipboard: &mut Option<ClipboardContext>,
) -> io::Result<LoopAction> {
    match choice {
        "" => form.generate(),
        "1" => {
            if let Some(len) = get_numeric_input("Enter password length", form.length)? {
                form.set_length(len);
            }
            clear();
        }
        "c" => copy(form, clipboard),
        "a" => print_about(),
        "h" | "help" => print_help(),
        "q" => return Ok(Break),
        other => match other.parse::<u32>() {
            Ok(n) if form.toggle(n) => {}
            _ => form.status = Status::Error(format!("Invalid option: {other}")),
        },
    }
    Ok(Continue)
}

/// The context lives as long as the form; on X11 the selection dies with it.
fn copy(form: &mut Form, clipboard: &mut Option<ClipboardContext>) {
    let Some(pass) = form.password.as_ref() else {
        return;
    };

    let copied = match clipboard {
        Some(ctx) => ctx.set_contents(pass.to_string()),
        None => ClipboardContext::new().and_then(|mut ctx| {
            ctx.set_contents(pass.to_string())?;
            *clipboard = Some(ctx);
            Ok(())
        }),
    };
    form.status = match copied {
        Ok(()) => Status::Copied,
        Err(e) => {
            info!(error = %e, "clipboard unavailable");
            Status::Error(format!("Clipboard error: {e}"))
        }
    };
}
