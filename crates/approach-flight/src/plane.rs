//! Per-plane flight state machine.
//!
//! A [`Plane`] borrows its type and its entry/exit points from the loaded
//! configuration and airspace. The engine advances it with [`Plane::tick`],
//! which runs `moves_per_tick` internal steps, and the operator steers it
//! through the command methods.

use tracing::debug;

use approach_core::airspace::{Airspace, EntryPoint};
use approach_core::commands::PlaneCommand;
use approach_core::config::PlaneType;
use approach_core::constants::{FUEL_INDICATOR, MAX_HEIGHT, MAX_TURN};
use approach_core::enums::PlaneState;
use approach_core::events::EndReason;
use approach_core::state::PlaneView;
use approach_core::types::{Callsign, Direction, Position, Ticks};

/// Placeholder until the generator hands out callsigns.
pub const UNASSIGNED_CALLSIGN: Callsign = '?';

/// One aircraft and its complete flight state.
#[derive(Debug, Clone)]
pub struct Plane<'a> {
    pub callsign: Callsign,
    pub plane_type: &'a PlaneType,
    pub entry: &'a EntryPoint,
    pub exit: &'a EntryPoint,

    // --- Timing ---
    /// Clock value the plane is scheduled to start at.
    pub start: Ticks,
    pub state: PlaneState,
    /// Internal steps to idle before the next action.
    pub wait_ticks: Ticks,
    pub fuel_left: Ticks,

    // --- Kinematics ---
    pub position: Position,
    pub direction: Direction,
    pub height: u8,
    pub want_height: u8,
    /// Height at the start of the current step, for crossover detection.
    pub last_height: u8,
    pub initial_height: u8,

    // --- Standing instructions ---
    /// Remaining eighth-turns, applied one per move. Always within -4..=4.
    pub want_turn: i32,
    pub hovering: bool,
    pub hold_at_navaid: bool,
    pub holding: bool,
    pub cleared_to: Option<char>,
}

impl<'a> Plane<'a> {
    /// Materialize a scheduled plane at its entry point.
    ///
    /// Hover-capable types start parked when taking off from an airport, and
    /// planes bound for an airport are pre-instructed to hold at a navaid.
    pub fn new(
        plane_type: &'a PlaneType,
        entry: &'a EntryPoint,
        exit: &'a EntryPoint,
        direction: Direction,
        start: Ticks,
        initial_height: u8,
    ) -> Self {
        Self {
            callsign: UNASSIGNED_CALLSIGN,
            plane_type,
            entry,
            exit,
            start,
            state: PlaneState::Pending,
            wait_ticks: 0,
            fuel_left: plane_type.initial_fuel,
            position: entry.position,
            direction,
            height: initial_height,
            want_height: initial_height,
            last_height: initial_height,
            initial_height,
            want_turn: 0,
            hovering: plane_type.can_hover && entry.is_airport,
            hold_at_navaid: exit.is_airport,
            holding: false,
            cleared_to: None,
        }
    }

    // ---- Predicates ----

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_airborne(&self) -> bool {
        self.state.is_airborne()
    }

    pub fn is_consuming_fuel(&self) -> bool {
        self.state.is_consuming_fuel()
    }

    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    pub fn accepts_commands(&self) -> bool {
        self.state.accepts_commands()
    }

    pub fn is_fuel_low(&self) -> bool {
        self.fuel_left < FUEL_INDICATOR
    }

    // ---- Tick advance ----

    /// Advance one scenario tick. `clock` is the remaining scenario time.
    pub fn tick(&mut self, airspace: &Airspace, clock: Ticks) -> Result<(), EndReason> {
        for _ in 0..self.plane_type.moves_per_tick {
            if self.is_done() {
                break;
            }
            self.step(airspace, clock)?;
        }
        Ok(())
    }

    /// One internal advance step.
    fn step(&mut self, airspace: &Airspace, clock: Ticks) -> Result<(), EndReason> {
        if self.is_consuming_fuel() {
            self.fuel_left = self.fuel_left.saturating_sub(1);
            if self.fuel_left == 0 {
                return Err(EndReason::FuelExhausted {
                    plane: self.callsign,
                });
            }
        }

        if self.wait_ticks > 0 {
            self.wait_ticks -= 1;
            return Ok(());
        }

        self.last_height = self.height;

        match self.state {
            PlaneState::Pending => self.announce(clock),
            PlaneState::Incoming => self.set_state(PlaneState::Flying),
            // Waits for a height command.
            PlaneState::Waiting => {}
            PlaneState::Rolling => {
                self.update_position(airspace)?;
                if !self.is_done() {
                    self.apply_wants();
                    self.set_state(PlaneState::Flying);
                }
            }
            PlaneState::Flying | PlaneState::Approach => self.fly(airspace)?,
            PlaneState::Landed | PlaneState::Departed => {}
        }
        Ok(())
    }

    /// Make a pending plane visible once its announcement window opens.
    fn announce(&mut self, clock: Ticks) {
        if clock > self.start.saturating_add(self.plane_type.ticks_pending) {
            return;
        }

        if self.entry.is_airport {
            self.height = 0;
            self.set_state(PlaneState::Waiting);
        } else {
            self.height = self.initial_height;
            self.wait_ticks = self.plane_type.ticks_pending;
            self.set_state(PlaneState::Incoming);
        }
        self.want_height = self.height;
        self.position = self.entry.position;
    }

    fn fly(&mut self, airspace: &Airspace) -> Result<(), EndReason> {
        if self.holding {
            self.direction = self.direction.left(1);
        }

        self.update_position(airspace)?;
        if self.is_done() {
            return Ok(());
        }
        self.apply_wants();

        if airspace.navaid_at(self.position).is_some() {
            if self.hold_at_navaid {
                self.holding = true;
            }
            if let Some(runway) = self.cleared_to.and_then(|sign| airspace.entry_point(sign)) {
                self.direction = runway.direction;
            }
        }

        self.wait_ticks = self.plane_type.ticks_per_move.saturating_sub(1);
        Ok(())
    }

    /// Move one cell along the current heading, unless hovering.
    fn update_position(&mut self, airspace: &Airspace) -> Result<(), EndReason> {
        let next = if self.hovering {
            self.position
        } else {
            self.position.moved(self.direction, 1)
        };

        if !airspace.contains(next) {
            if self.position == self.exit.position && self.height == self.plane_type.exit_height {
                self.set_state(PlaneState::Departed);
                return Ok(());
            }
            return Err(EndReason::BoundaryError {
                plane: self.callsign,
            });
        }

        if !self.plane_type.can_enter_no_fly && airspace.is_no_fly(next) {
            return Err(EndReason::NoFlyViolation {
                plane: self.callsign,
            });
        }

        if self.state == PlaneState::Approach {
            if let Some(field) = airspace.entry_point_at(next) {
                if field.sign == self.exit.sign && self.height == 0 {
                    self.set_state(PlaneState::Landed);
                    return Ok(());
                }
                // Go around, unless parked over the field.
                if !self.hovering {
                    self.set_state(PlaneState::Flying);
                    self.height = 1;
                    self.want_height = 1;
                }
            }
        }

        self.position = next;
        Ok(())
    }

    /// Close one step of the pending turn and height change.
    fn apply_wants(&mut self) {
        if self.want_turn > 0 {
            self.direction = self.direction.right(1);
            self.want_turn -= 1;
        } else if self.want_turn < 0 {
            self.direction = self.direction.left(1);
            self.want_turn += 1;
        }

        if self.want_height > self.height {
            self.height += 1;
        } else if self.want_height < self.height {
            self.height -= 1;
        }
    }

    fn set_state(&mut self, state: PlaneState) {
        if self.state != state {
            debug!(callsign = %self.callsign, from = ?self.state, to = ?state, "plane state change");
            self.state = state;
        }
    }

    // ---- Commands ----

    /// Apply an operator command. The only way to command a plane: nothing
    /// is accepted outside `Waiting`, `Rolling` and `Flying`.
    pub fn execute(&mut self, command: PlaneCommand) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        match command {
            PlaneCommand::Turn { delta } => self.turn(delta),
            PlaneCommand::SetHeight { height } => self.set_height(height),
            PlaneCommand::Hold => self.hold(),
            PlaneCommand::ToggleHover => self.toggle_hover(),
            PlaneCommand::ClearToApproach { sign } => self.clear_to_approach(sign),
        }
    }

    /// Turn by `delta` eighth-turns. Cancels holding and approach clearance.
    fn turn(&mut self, delta: i32) -> bool {
        if !(-MAX_TURN..=MAX_TURN).contains(&delta) {
            return false;
        }

        if self.plane_type.immediate_turn {
            self.direction = self.direction.right(delta);
            self.want_turn = 0;
        } else {
            self.want_turn = delta;
        }
        self.holding = false;
        self.hold_at_navaid = false;
        self.cleared_to = None;
        true
    }

    /// Set the target height. Zero starts an approach and needs `Flying`;
    /// any other height clears a waiting plane for take-off.
    fn set_height(&mut self, height: i32) -> bool {
        let Ok(height) = u8::try_from(height) else {
            return false;
        };
        if height > MAX_HEIGHT {
            return false;
        }

        if height == 0 {
            if self.state != PlaneState::Flying {
                return false;
            }
            self.set_state(PlaneState::Approach);
            self.want_height = 0;
            return true;
        }

        self.want_height = height;
        if self.state == PlaneState::Waiting {
            self.wait_ticks = self.plane_type.ticks_rolling;
            self.set_state(PlaneState::Rolling);
        }
        true
    }

    fn hold(&mut self) -> bool {
        self.hold_at_navaid = true;
        self.cleared_to = None;
        true
    }

    fn toggle_hover(&mut self) -> bool {
        if !self.plane_type.can_hover {
            return false;
        }
        self.hovering = !self.hovering;
        true
    }

    fn clear_to_approach(&mut self, sign: char) -> bool {
        self.cleared_to = Some(sign);
        self.hold_at_navaid = false;
        true
    }

    // ---- Presentation ----

    pub fn view(&self) -> PlaneView {
        PlaneView {
            callsign: self.callsign,
            mark: self.plane_type.mark,
            entry: self.entry.sign,
            exit: self.exit.sign,
            state: self.state,
            start: self.start,
            position: self.position,
            direction: self.direction,
            height: self.height,
            want_height: self.want_height,
            turning_to: (self.want_turn != 0).then(|| self.direction.right(self.want_turn)),
            hovering: self.hovering,
            holding: self.holding,
            hold_at_navaid: self.hold_at_navaid,
            cleared_to: self.cleared_to,
            visible: self.is_visible(),
            active: self.is_active(),
            airborne: self.is_airborne(),
            done: self.is_done(),
            fuel_low: self.is_fuel_low(),
        }
    }
}
