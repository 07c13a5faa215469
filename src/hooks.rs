use crate::counter::CounterState;
use crate::draft::TargetDraft;
use crate::haptics::HapticsContext;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Snapshot of the counter plus callbacks for its four actions.
#[derive(Clone)]
pub struct CounterHandle {
    /// Committed state as of this render.
    pub state: CounterState,
    pub on_tap: Callback<()>,
    pub on_reset: Callback<()>,
    /// Commit a target candidate; `None` means "not a number".
    pub on_set_target: Callback<Option<i64>>,
    pub on_toggle_vibration: Callback<()>,
}

/// Owns the counter state machine for the lifetime of the component.
///
/// The machine sits in a `RefCell` so each action runs to completion against
/// the latest state, then a re-render is forced. A tap that reaches the target
/// while armed fires the returned pattern on `haptics`.
#[hook]
pub fn use_counter(haptics: HapticsContext) -> CounterHandle {
    let machine = use_mut_ref(CounterState::default);
    let trigger = use_force_update();

    let on_tap = {
        let machine = machine.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: ()| {
            let outcome = machine.borrow_mut().tap();
            if let Some(pattern) = outcome.haptic() {
                haptics.fire(pattern);
            }
            trigger.force_update();
        })
    };

    let on_reset = {
        let machine = machine.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: ()| {
            machine.borrow_mut().reset();
            trigger.force_update();
        })
    };

    let on_set_target = {
        let machine = machine.clone();
        let trigger = trigger.clone();
        Callback::from(move |candidate: Option<i64>| {
            machine.borrow_mut().set_target(candidate);
            trigger.force_update();
        })
    };

    let on_toggle_vibration = {
        let machine = machine.clone();
        Callback::from(move |_: ()| {
            machine.borrow_mut().toggle_vibration_armed();
            trigger.force_update();
        })
    };

    let state = *machine.borrow();
    CounterHandle {
        state,
        on_tap,
        on_reset,
        on_set_target,
        on_toggle_vibration,
    }
}

/// Open/closed status and draft selection of the target sheet.
#[derive(Clone)]
pub struct TargetSheetHandle {
    pub open: bool,
    pub draft: TargetDraft,
    /// Re-seeds the draft from the committed target and shows the sheet.
    pub on_open: Callback<()>,
    /// Hides the sheet without applying anything.
    pub on_close: Callback<()>,
    pub on_choose_preset: Callback<u64>,
    pub on_choose_custom: Callback<()>,
    /// Callback for the custom input's `oninput` event.
    pub on_custom_input: Callback<InputEvent>,
    /// Commits the draft through `on_commit` and hides the sheet.
    pub on_apply: Callback<()>,
}

#[hook]
pub fn use_target_sheet(
    committed_target: u64,
    on_commit: Callback<Option<i64>>,
) -> TargetSheetHandle {
    let open = use_state(|| false);
    let draft = use_state(|| TargetDraft::seeded(committed_target));

    let on_open = {
        let open = open.clone();
        let draft = draft.clone();
        Callback::from(move |_: ()| {
            draft.set(TargetDraft::seeded(committed_target));
            open.set(true);
        })
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    let on_choose_preset = {
        let draft = draft.clone();
        Callback::from(move |value: u64| {
            let mut next = (*draft).clone();
            next.choose_preset(value);
            draft.set(next);
        })
    };

    let on_choose_custom = {
        let draft = draft.clone();
        Callback::from(move |_: ()| {
            let mut next = (*draft).clone();
            next.choose_custom();
            draft.set(next);
        })
    };

    let on_custom_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set_custom_text(input.value());
            draft.set(next);
        })
    };

    let on_apply = {
        let open = open.clone();
        let draft = draft.clone();
        Callback::from(move |_: ()| {
            on_commit.emit(draft.candidate());
            open.set(false);
        })
    };

    TargetSheetHandle {
        open: *open,
        draft: (*draft).clone(),
        on_open,
        on_close,
        on_choose_preset,
        on_choose_custom,
        on_custom_input,
        on_apply,
    }
}
