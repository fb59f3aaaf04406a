use crate::{
    core::{
        cmd::Cmd,
        msg::{form::FormMsg, mode::ModeMsg, Msg},
        state::{form::FormState, AppState, Mode},
        textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
    },
    domain::form::FormKind,
};

/// Side-effect-free collaborators the update function may consult
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// Text input is dropped; use `update_with_context` to edit fields.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static NOOP: NoopTextAreaEngine = NoopTextAreaEngine;
    update_with_context(msg, state, &UpdateContext { text_area: &NOOP })
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Mode(mode_msg) => {
            let commands = update_mode(mode_msg, &mut state);
            (state, commands)
        }

        Msg::Form(form_msg) => {
            let commands = update_form(form_msg, &mut state, ctx);
            (state, commands)
        }
    }
}

fn update_mode(msg: ModeMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        ModeMsg::EnterAdd => {
            if state.mode.kind() == Some(FormKind::Add) {
                return vec![];
            }
            state.mode = Mode::Add(FormState::add());
            vec![Cmd::LogInfo {
                message: "Add form mounted".to_owned(),
            }]
        }

        ModeMsg::EnterEdit(values) => {
            if state.mode.kind() == Some(FormKind::Edit) {
                return vec![];
            }
            state.mode = Mode::Edit(FormState::edit(values));
            vec![Cmd::LogInfo {
                message: "Edit form mounted".to_owned(),
            }]
        }

        ModeMsg::Reset => {
            state.mode = Mode::None;
            vec![]
        }
    }
}

fn update_form(msg: FormMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    let today = state.today;
    let Some(form) = state.mode.form_mut() else {
        log::debug!("Form message without a mounted form: {msg:?}");
        return vec![];
    };

    match msg {
        FormMsg::FocusNext => form.focus_next(),
        FormMsg::FocusPrev => form.focus_prev(),
        FormMsg::Focus(field) => form.set_focus(field),

        FormMsg::ProcessTextAreaInput(key) => form.apply_keys(ctx.text_area, &[key]),
        FormMsg::Paste(text) => form.paste(ctx.text_area, &text),

        FormMsg::CountryNext => form.set_country(form.country().next()),
        FormMsg::CountryPrev => form.set_country(form.country().prev()),
        FormMsg::CountryJump(initial) => {
            form.set_country(form.country().next_starting_with(initial))
        }

        FormMsg::SetConsumeToday => form.set_consume(today),
        FormMsg::ShiftConsume(days) => form.shift_consume(days, today),

        FormMsg::Submit => {
            return match form.submit() {
                Some(submission) => {
                    state.mode = Mode::None;
                    vec![Cmd::Complete(submission)]
                }
                None => vec![Cmd::LogInfo {
                    message: format!(
                        "Submit rejected ({} invalid field(s))",
                        form.report().map_or(0, |r| r.errors().len())
                    ),
                }],
            };
        }
    }

    vec![]
}
