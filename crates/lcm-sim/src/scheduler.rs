//! The `Scheduler` struct and its round state machine.

use lcm_core::{AgentId, AgentRng, LatticePoint, LcmConfig, Orientation, Tick};
use lcm_policy::{Path, View};
use tracing::{debug, info, trace, warn};

use crate::agent::Agent;
use crate::command::{Command, CommandQueue, CommandSender};
use crate::{
    CollisionReport, Completion, NeverComplete, NoopObserver, RoundObserver, RoundState,
    Snapshot, detect_collisions,
};

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// The synchronous Look-Compute-Move round scheduler.
///
/// `Scheduler<C>` owns every agent, its RNG and its current path, and advances
/// one state-machine step per [`advance`][Self::advance] call:
///
/// 1. **Commands**: drain the command queue (start, pause, resume, pacing).
/// 2. **Step**: execute the entry action of the current state and move to
///    the next one (see [`RoundState`]).
///
/// A step runs to completion without blocking.  Between steps the scheduler
/// is immutable, so any number of readers may query it.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct Scheduler<C: Completion = NeverComplete> {
    pub(crate) config: LcmConfig,

    pub(crate) state: RoundState,

    /// State to return to on resume.  `Some` only while paused.
    pub(crate) paused_from: Option<RoundState>,

    /// Number of CYCLE entries so far.
    pub(crate) round: u64,

    /// Number of executed steps.
    pub(crate) tick: Tick,

    /// Agents in `AgentId` order.  Positions are in local frames.
    pub(crate) agents: Vec<Agent>,

    /// Per-agent RNGs, separate from `agents` so a policy can borrow its
    /// agent immutably while drawing from its RNG.
    pub(crate) rngs: Vec<AgentRng>,

    /// Per-agent paths for the current round, local frames.
    pub(crate) paths: Vec<Path>,

    /// Landmarks in the global frame.
    pub(crate) landmarks: Vec<LatticePoint>,

    /// Last LOOK snapshot in the global frame.  Aligned agents read this one.
    pub(crate) snapshot: Snapshot,

    /// The same snapshot reflected once for every mirrored agent.
    pub(crate) mirrored: Snapshot,

    /// MOVE ticks left until the next committed step.
    pub(crate) countdown: u32,

    pub(crate) last_collision: Option<CollisionReport>,

    pub(crate) completion: C,

    pub(crate) commands: CommandQueue,
}

impl<C: Completion> Scheduler<C> {
    // ── Tick surface ──────────────────────────────────────────────────────

    /// Execute exactly one state-machine step.
    pub fn advance(&mut self) {
        self.advance_with(&mut NoopObserver);
    }

    /// Execute exactly one state-machine step, reporting to `observer`.
    ///
    /// Queued commands are applied first.  Nothing else happens in `Ready`
    /// (waiting for start), `Paused`, or a terminal state.
    pub fn advance_with<O: RoundObserver>(&mut self, observer: &mut O) {
        self.apply_commands(observer);

        match self.state {
            RoundState::Ready | RoundState::Paused => return,
            s if s.is_terminal() => return,
            _ => {}
        }

        self.tick = self.tick.next();
        let tick = self.tick;

        match self.state {
            RoundState::Cycle => {
                self.round += 1;
                info!(round = self.round, %tick, "round start");
                self.transition(RoundState::Look, observer);
            }
            RoundState::Look => {
                self.look();
                observer.on_look(tick, &self.snapshot);
                if self.completion.is_complete(&self.snapshot) {
                    info!(round = self.round, %tick, "completion predicate satisfied");
                    self.transition(RoundState::Done, observer);
                } else {
                    self.transition(RoundState::Compute, observer);
                }
            }
            RoundState::Compute => {
                self.compute();
                observer.on_paths(tick, self.round, &self.paths);
                self.countdown = self.config.ticks_per_step;
                self.transition(RoundState::Move, observer);
            }
            RoundState::Move => self.step_move(observer),
            RoundState::Ready | RoundState::Paused | RoundState::Done | RoundState::Error => {}
        }
    }

    /// Run exactly `n` steps.  Steps in `Ready`, `Paused` or terminal states
    /// still drain commands but change nothing else.
    pub fn run_ticks<O: RoundObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.advance_with(observer);
        }
    }

    /// Step until the scheduler reaches `Done` or `Error`, or `max_ticks`
    /// calls have been made.  Returns the number of calls made.
    pub fn run_until_terminal<O: RoundObserver>(&mut self, max_ticks: u64, observer: &mut O) -> u64 {
        let mut calls = 0;
        while calls < max_ticks && !self.state.is_terminal() {
            self.advance_with(observer);
            calls += 1;
        }
        calls
    }

    // ── Command surface ───────────────────────────────────────────────────

    /// READY → CYCLE.  No-op in any other state.
    pub fn start(&mut self) {
        self.apply(Command::Start, &mut NoopObserver);
    }

    /// Freeze the state machine until [`resume`][Self::resume].  No-op when
    /// already paused or terminal.
    pub fn pause(&mut self) {
        self.apply(Command::Pause, &mut NoopObserver);
    }

    pub fn resume(&mut self) {
        self.apply(Command::Resume, &mut NoopObserver);
    }

    /// A handle for issuing commands from other threads.  Commands sent
    /// through it are applied at the start of the next tick.
    pub fn command_sender(&self) -> CommandSender {
        self.commands.sender()
    }

    // ── Query surface ─────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    pub fn current_round(&self) -> u64 {
        self.round
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn config(&self) -> &LcmConfig {
        &self.config
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Every agent's position in the global frame, indexed by `AgentId`.
    pub fn global_positions(&self) -> Vec<LatticePoint> {
        self.agents.iter().map(Agent::global_position).collect()
    }

    /// Every agent's position in its own local frame, indexed by `AgentId`.
    pub fn local_positions(&self) -> Vec<LatticePoint> {
        self.agents.iter().map(|a| a.local).collect()
    }

    pub fn orientation(&self, agent: AgentId) -> Option<Orientation> {
        self.agents.get(agent.index()).map(|a| a.orientation)
    }

    /// Landmarks in the global frame.
    pub fn landmarks(&self) -> &[LatticePoint] {
        &self.landmarks
    }

    /// Lattice points involved in the most recent detected collision.
    pub fn last_collision(&self) -> Option<&[LatticePoint]> {
        self.last_collision.as_ref().map(|r| r.points.as_slice())
    }

    /// Waypoints `agent` still has to consume this round.
    pub fn remaining_waypoints(&self, agent: AgentId) -> Option<usize> {
        self.paths.get(agent.index()).map(Path::len)
    }

    /// The most recent LOOK snapshot (empty before the first round).
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    // ── Commands ──────────────────────────────────────────────────────────

    fn apply_commands<O: RoundObserver>(&mut self, observer: &mut O) {
        for command in self.commands.drain() {
            self.apply(command, observer);
        }
    }

    fn apply<O: RoundObserver>(&mut self, command: Command, observer: &mut O) {
        if self.state.is_terminal() {
            debug!(?command, state = %self.state, "command ignored in terminal state");
            return;
        }
        match command {
            Command::Start => {
                if self.state == RoundState::Ready {
                    self.transition(RoundState::Cycle, observer);
                } else {
                    debug!(state = %self.state, "start ignored outside ready");
                }
            }
            Command::Pause => {
                if self.state != RoundState::Paused {
                    self.paused_from = Some(self.state);
                    self.transition(RoundState::Paused, observer);
                }
            }
            Command::Resume => {
                if let Some(previous) = self.paused_from.take() {
                    self.transition(previous, observer);
                }
            }
            Command::SetTicksPerStep(ticks) => {
                self.config.ticks_per_step = ticks.get();
                self.countdown = self.countdown.min(ticks.get());
                debug!(ticks_per_step = ticks.get(), "pacing changed");
            }
            Command::SetErrorOnCollision(fatal) => {
                self.config.error_on_collision = fatal;
                debug!(error_on_collision = fatal, "collision policy changed");
            }
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn transition<O: RoundObserver>(&mut self, to: RoundState, observer: &mut O) {
        let from = std::mem::replace(&mut self.state, to);
        debug!(tick = self.tick.0, round = self.round, %from, %to, "transition");
        observer.on_transition(self.tick, self.round, from, to);
    }

    /// Freeze global positions and derive the mirrored frame.
    fn look(&mut self) {
        let agents = self.global_positions();
        self.mirrored = Snapshot {
            round:     self.round,
            agents:    Orientation::Mirrored.reflect_all(&agents),
            landmarks: Orientation::Mirrored.reflect_all(&self.landmarks),
        };
        self.snapshot = Snapshot {
            round:     self.round,
            agents,
            landmarks: self.landmarks.clone(),
        };
    }

    /// Ask every policy for its path.  Each agent reads the frame matching
    /// its orientation; both frames come from the same LOOK snapshot.
    fn compute(&mut self) {
        let round = self.round;
        let aligned = &self.snapshot;
        let mirrored = &self.mirrored;

        for (i, ((agent, rng), path)) in self
            .agents
            .iter()
            .zip(self.rngs.iter_mut())
            .zip(self.paths.iter_mut())
            .enumerate()
        {
            let frame = match agent.orientation {
                Orientation::Aligned  => aligned,
                Orientation::Mirrored => mirrored,
            };
            let view = View::new(AgentId(i as u32), round, &frame.agents, &frame.landmarks);
            *path = agent.policy.decide(&view, rng);
            trace!(agent = i, policy = agent.policy.name(), waypoints = path.len(), "path computed");
        }
    }

    /// One MOVE tick: count down, or commit one waypoint per non-empty path.
    fn step_move<O: RoundObserver>(&mut self, observer: &mut O) {
        if self.countdown > 1 {
            self.countdown -= 1;
            return;
        }
        self.countdown = self.config.ticks_per_step;

        for (i, (agent, path)) in self.agents.iter_mut().zip(self.paths.iter_mut()).enumerate() {
            let Some(waypoint) = path.pop() else { continue };
            if waypoint.in_bounds() {
                agent.local = waypoint;
            } else {
                warn!(agent = i, %waypoint, "waypoint out of bounds; path discarded");
                path.clear();
            }
        }

        let positions = self.global_positions();
        observer.on_commit(self.tick, self.round, &positions);

        let report = detect_collisions(&positions);
        if report.is_collision() {
            let fatal = self.config.error_on_collision;
            warn!(round = self.round, tick = self.tick.0, points = ?report.points, fatal, "collision");
            observer.on_collision(self.tick, self.round, &report);
            self.last_collision = Some(report);
            if fatal {
                self.transition(RoundState::Error, observer);
                return;
            }
        }

        if self.paths.iter().all(Path::is_empty) {
            self.transition(RoundState::Cycle, observer);
        }
    }
}
