//! Fluent builder for constructing a [`Scheduler`].

use lcm_core::{AgentRng, LatticePoint, LcmConfig, Orientation};
use lcm_policy::{DecisionPolicy, Path};
use tracing::warn;

use crate::agent::Agent;
use crate::command::CommandQueue;
use crate::{
    Completion, NeverComplete, RoundState, Scheduler, SimError, SimResult, Snapshot,
    detect_collisions,
};

/// Fluent builder for [`Scheduler<C>`].
///
/// # Required inputs
///
/// - [`LcmConfig`]: pacing, collision policy, seed
/// - one boxed [`DecisionPolicy`] per agent; the vector length fixes the
///   agent count N
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                            |
/// |--------------------------|------------------------------------|
/// | `.orientations(v)`       | All `Orientation::Aligned`         |
/// | `.initial_positions(v)`  | All agents at the local origin     |
/// | `.landmarks(v)`          | No landmarks                       |
/// | `.completion(c)`         | [`NeverComplete`]                  |
///
/// Per-agent vectors must have length N.  Initial positions are in each
/// agent's local frame; landmarks are in the global frame.  Every point must
/// satisfy [`LatticePoint::in_bounds`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sched = SchedulerBuilder::new(config, policies)
///     .orientations(vec![Orientation::Aligned, Orientation::Mirrored])
///     .landmarks(vec![LatticePoint::new(5, 5)])
///     .build()?;
/// ```
pub struct SchedulerBuilder<C: Completion = NeverComplete> {
    config:       LcmConfig,
    policies:     Vec<Box<dyn DecisionPolicy>>,
    orientations: Option<Vec<Orientation>>,
    positions:    Option<Vec<LatticePoint>>,
    landmarks:    Vec<LatticePoint>,
    completion:   C,
}

impl SchedulerBuilder<NeverComplete> {
    /// Create a builder with all required inputs.
    pub fn new(config: LcmConfig, policies: Vec<Box<dyn DecisionPolicy>>) -> Self {
        Self {
            config,
            policies,
            orientations: None,
            positions:    None,
            landmarks:    Vec::new(),
            completion:   NeverComplete,
        }
    }
}

impl<C: Completion> SchedulerBuilder<C> {
    /// Supply one orientation per agent (must be length N).
    pub fn orientations(mut self, orientations: Vec<Orientation>) -> Self {
        self.orientations = Some(orientations);
        self
    }

    /// Supply one starting position per agent, in that agent's local frame
    /// (must be length N).
    pub fn initial_positions(mut self, positions: Vec<LatticePoint>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply the fixed landmark set, in the global frame.
    pub fn landmarks(mut self, landmarks: Vec<LatticePoint>) -> Self {
        self.landmarks = landmarks;
        self
    }

    /// Replace the completion predicate checked during every LOOK phase.
    pub fn completion<C2: Completion>(self, completion: C2) -> SchedulerBuilder<C2> {
        SchedulerBuilder {
            config:       self.config,
            policies:     self.policies,
            orientations: self.orientations,
            positions:    self.positions,
            landmarks:    self.landmarks,
            completion,
        }
    }

    /// Validate inputs, run the construction-time collision check, and return
    /// a scheduler in `Ready` (or `Error`, if the starting configuration
    /// already collides and the config says collisions are fatal).
    pub fn build(self) -> SimResult<Scheduler<C>> {
        self.config.validate()?;

        let agent_count = self.policies.len();
        if u32::try_from(agent_count).is_err() {
            return Err(SimError::TooManyAgents(agent_count));
        }

        let orientations = match self.orientations {
            Some(o) => {
                if o.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      o.len(),
                        what:     "orientations",
                    });
                }
                o
            }
            None => vec![Orientation::Aligned; agent_count],
        };

        let positions = match self.positions {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                p
            }
            None => vec![LatticePoint::ORIGIN; agent_count],
        };

        check_bounds("initial position", &positions)?;
        check_bounds("landmark", &self.landmarks)?;

        let agents: Vec<Agent> = self
            .policies
            .into_iter()
            .zip(orientations)
            .zip(positions)
            .map(|((policy, orientation), local)| Agent { local, orientation, policy })
            .collect();

        // ── Construction-time collision check (unthrottled) ───────────────
        let globals: Vec<LatticePoint> = agents.iter().map(Agent::global_position).collect();
        let report = detect_collisions(&globals);
        let mut state = RoundState::Ready;
        let mut last_collision = None;
        if report.is_collision() {
            warn!(
                points = ?report.points,
                fatal = self.config.error_on_collision,
                "starting configuration collides"
            );
            if self.config.error_on_collision {
                state = RoundState::Error;
            }
            last_collision = Some(report);
        }

        Ok(Scheduler {
            rngs:           AgentRng::for_agents(self.config.seed, agent_count),
            paths:          vec![Path::empty(); agent_count],
            countdown:      self.config.ticks_per_step,
            config:         self.config,
            state,
            paused_from:    None,
            round:          0,
            tick:           Default::default(),
            agents,
            landmarks:      self.landmarks,
            snapshot:       Snapshot::default(),
            mirrored:       Snapshot::default(),
            last_collision,
            completion:     self.completion,
            commands:       CommandQueue::new(),
        })
    }
}

fn check_bounds(what: &'static str, points: &[LatticePoint]) -> SimResult<()> {
    match points.iter().position(|p| !p.in_bounds()) {
        Some(index) => Err(SimError::OutOfBounds { what, index, point: points[index] }),
        None => Ok(()),
    }
}
