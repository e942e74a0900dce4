//! Pointer state machine: Idle <-> Dragging(body).
//!
//! The host forwards raw pointer events; each one is a single transition here.
//! Only one body can be held at a time.

use crate::domain::scene::{TriggerAction, TriggerEvent, TriggerSpec};
use crate::hit_test;
use crate::rigid_body::Vec2;

use super::SimulationCore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerState {
    #[default]
    Idle,
    /// Index into the body list
    Dragging { index: usize },
}

/// Tag-keyed scenario hook with its fired flag
#[derive(Clone, Debug)]
pub(crate) struct Trigger {
    spec: TriggerSpec,
    fired: bool,
}

impl Trigger {
    pub(crate) fn new(spec: TriggerSpec) -> Self {
        Self { spec, fired: false }
    }

    fn matches(&self, event: TriggerEvent, tag: Option<&str>) -> bool {
        self.spec.on == event
            && tag == Some(self.spec.tag.as_str())
            && !(self.spec.once && self.fired)
    }
}

/// Grab the topmost body under `client`. Returns its id.
pub(super) fn pointer_down(core: &mut SimulationCore, client: Vec2) -> Option<u32> {
    if core.scheduler.is_torn_down() {
        return None;
    }
    if let PointerState::Dragging { .. } = core.pointer {
        // Second press while holding: ignored until release
        return None;
    }

    let point = core.surface.to_local(client);
    let index = hit_test::pick(&core.bodies, point)?;

    let body = &mut core.bodies[index];
    body.begin_drag(point);
    let id = body.id;
    let tag = body.tag.clone();
    core.pointer = PointerState::Dragging { index };
    log::debug!("drag start: body {id} at ({:.1}, {:.1})", point.x, point.y);

    fire_triggers(core, TriggerEvent::Grab, tag.as_deref());
    Some(id)
}

/// Move the held body with the pointer. No-op while idle.
pub(super) fn pointer_move(core: &mut SimulationCore, client: Vec2) {
    if core.scheduler.is_torn_down() {
        return;
    }
    let PointerState::Dragging { index } = core.pointer else {
        return;
    };
    let point = core.surface.to_local(client);
    if let Some(body) = core.bodies.get_mut(index) {
        body.update_from_pointer(point);
    }
}

/// Release the held body. Returns its id; a stray release is a no-op.
pub(super) fn pointer_up(core: &mut SimulationCore) -> Option<u32> {
    let PointerState::Dragging { index } = core.pointer else {
        return None;
    };
    core.pointer = PointerState::Idle;

    let threshold = core.settings.release_threshold;
    let body = core.bodies.get_mut(index)?;
    body.end_drag(threshold);
    let id = body.id;
    let tag = body.tag.clone();
    log::debug!(
        "drag end: body {id} released at ({:.2}, {:.2})",
        body.velocity.x,
        body.velocity.y
    );

    fire_triggers(core, TriggerEvent::Release, tag.as_deref());
    Some(id)
}

/// Drop any active drag without release velocity or triggers
pub(super) fn pointer_cancel(core: &mut SimulationCore) {
    if let PointerState::Dragging { index } = core.pointer {
        if let Some(body) = core.bodies.get_mut(index) {
            body.cancel_drag();
            log::debug!("drag cancelled: body {}", body.id);
        }
    }
    core.pointer = PointerState::Idle;
}

fn fire_triggers(core: &mut SimulationCore, event: TriggerEvent, tag: Option<&str>) {
    for trigger in core.triggers.iter_mut() {
        if !trigger.matches(event, tag) {
            continue;
        }
        trigger.fired = true;
        match trigger.spec.action {
            TriggerAction::EnableGravity => core.settings.gravity_enabled = true,
            TriggerAction::DisableGravity => core.settings.gravity_enabled = false,
        }
        log::info!(
            "trigger {:?} on {:?} for tag {:?}",
            trigger.spec.action,
            event,
            trigger.spec.tag
        );
    }
}
