//! The mutable board for one play session.
//!
//! [`Board`] exclusively owns every placed habitat, placed agent and
//! connection, plus the credit balance, the pending connection attempt and
//! the countdown. Each mutation validates and applies in one call; a
//! rejected mutation returns a [`BoardError`] and changes nothing.

use std::sync::Arc;

use tracing::debug;

use ecoarchitect_catalog::{Catalog, MAX_LEVEL};
use ecoarchitect_types::{
    AgentId, AgentType, BoardSnapshot, Connection, ConnectionId, HabitatId, HabitatType,
    PlacedAgent, PlacedHabitat, Position, Scenario,
};

use crate::connect::ConnectMode;
use crate::countdown::{Countdown, TickOutcome};
use crate::error::BoardError;

/// Horizontal offset of the first seeded habitat.
const SEED_ORIGIN_X: i32 = 200;

/// Horizontal spacing between seeded habitats.
const SEED_SPACING_X: i32 = 250;

/// Vertical position of every seeded habitat.
const SEED_Y: i32 = 200;

/// Log a rejected mutation and hand the error back.
fn reject(action: &'static str, err: BoardError) -> BoardError {
    debug!(action, %err, "Board mutation rejected");
    err
}

/// Board state for the active scenario.
#[derive(Debug, Clone)]
pub struct Board {
    catalog: Arc<Catalog>,
    snapshot: BoardSnapshot,
    credits: u32,
    starting_credits: u32,
    connect: ConnectMode,
    countdown: Countdown,
}

impl Board {
    /// An empty board holding `credits` and a zero countdown.
    pub fn new(catalog: Arc<Catalog>, credits: u32) -> Self {
        Self {
            catalog,
            snapshot: BoardSnapshot::default(),
            credits,
            starting_credits: credits,
            connect: ConnectMode::Idle,
            countdown: Countdown::default(),
        }
    }

    /// A board prepared for `scenario`.
    ///
    /// Credits are the scenario budget and the countdown holds the
    /// scenario's minutes (paused). Each given habitat is placed free at
    /// level 1, left to right, together with its given agents; the given
    /// agents skip the capacity check.
    pub fn seeded(catalog: Arc<Catalog>, scenario: &Scenario) -> Self {
        let mut board = Self::new(catalog, scenario.credits);
        board.countdown = Countdown::from_minutes(scenario.time_minutes);

        for (index, given) in scenario.given.iter().enumerate() {
            let x = i32::try_from(index)
                .ok()
                .and_then(|i| i.checked_mul(SEED_SPACING_X))
                .and_then(|offset| offset.checked_add(SEED_ORIGIN_X))
                .unwrap_or(i32::MAX);
            let habitat_id = HabitatId::new();
            let mut agent_ids = Vec::with_capacity(given.agents.len());
            for agent_type in &given.agents {
                let agent_id = AgentId::new();
                agent_ids.push(agent_id);
                board.snapshot.agents.push(PlacedAgent {
                    id: agent_id,
                    agent_type: *agent_type,
                    habitat_id,
                });
            }
            board.snapshot.habitats.push(PlacedHabitat {
                id: habitat_id,
                habitat_type: given.habitat_type,
                level: 1,
                agents: agent_ids,
                position: Position::new(x, SEED_Y),
            });
        }

        debug!(
            scenario_id = %scenario.id,
            habitats = board.snapshot.habitats.len(),
            agents = board.snapshot.agents.len(),
            credits = board.credits,
            "Board seeded"
        );
        board
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The catalog this board prices against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog.
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Read-only view of everything placed.
    pub const fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Credits currently held.
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// Credits the board started with.
    pub const fn starting_credits(&self) -> u32 {
        self.starting_credits
    }

    /// Net credits spent so far (refunds included).
    pub const fn credits_spent(&self) -> u32 {
        self.starting_credits.saturating_sub(self.credits)
    }

    /// Current connection attempt state.
    pub const fn connect_mode(&self) -> ConnectMode {
        self.connect
    }

    /// The countdown.
    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// A placed habitat by id.
    pub fn habitat(&self, id: HabitatId) -> Option<&PlacedHabitat> {
        self.snapshot.habitat(id)
    }

    /// A placed agent by id.
    pub fn agent(&self, id: AgentId) -> Option<&PlacedAgent> {
        self.snapshot.agent(id)
    }

    /// Agents owned by a habitat, in placement order.
    pub fn agents_in(&self, habitat: HabitatId) -> Vec<&PlacedAgent> {
        self.snapshot
            .agents
            .iter()
            .filter(|a| a.habitat_id == habitat)
            .collect()
    }

    /// The connection joining `a` and `b`, in either direction.
    pub fn connection_between(&self, a: HabitatId, b: HabitatId) -> Option<&Connection> {
        self.snapshot.connections.iter().find(|c| c.joins(a, b))
    }

    /// Base capacity plus one per level above 1. A habitat type missing
    /// from the catalog has base capacity 0.
    pub fn effective_capacity(&self, habitat: &PlacedHabitat) -> u32 {
        let base = self
            .catalog
            .habitat(habitat.habitat_type)
            .map_or(0, |d| d.capacity);
        habitat.effective_capacity(base)
    }

    // -----------------------------------------------------------------------
    // Habitats
    // -----------------------------------------------------------------------

    /// Place a level-1 habitat with no agents.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownHabitatType`] or
    /// [`BoardError::InsufficientCredits`].
    pub fn place_habitat(
        &mut self,
        habitat_type: HabitatType,
        position: Position,
    ) -> Result<HabitatId, BoardError> {
        const ACTION: &str = "place_habitat";
        let cost = self
            .catalog
            .habitat(habitat_type)
            .map(|d| d.cost)
            .ok_or_else(|| reject(ACTION, BoardError::UnknownHabitatType(habitat_type)))?;
        self.charge(cost).map_err(|err| reject(ACTION, err))?;

        let id = HabitatId::new();
        self.snapshot.habitats.push(PlacedHabitat {
            id,
            habitat_type,
            level: 1,
            agents: Vec::new(),
            position,
        });
        debug!(habitat = %id, %habitat_type, cost, credits = self.credits, "Habitat placed");
        Ok(id)
    }

    /// Remove a habitat together with its agents and connections.
    ///
    /// Refunds 70% (rounded down) of the habitat cost, the removed agents'
    /// costs and the upgrade spend for its level. Returns the refund.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownHabitat`].
    pub fn remove_habitat(&mut self, id: HabitatId) -> Result<u32, BoardError> {
        let habitat = self
            .snapshot
            .habitat(id)
            .ok_or_else(|| reject("remove_habitat", BoardError::UnknownHabitat(id)))?;

        let habitat_cost = self
            .catalog
            .habitat(habitat.habitat_type)
            .map_or(0, |d| d.cost);
        let agent_cost = self
            .snapshot
            .agents
            .iter()
            .filter(|a| a.habitat_id == id)
            .map(|a| self.agent_cost(a.agent_type))
            .fold(0_u32, u32::saturating_add);
        let upgrade_cost = self.catalog.pricing().cumulative_upgrade_cost(habitat.level);
        let spent = habitat_cost
            .saturating_add(agent_cost)
            .saturating_add(upgrade_cost);
        let refund = self.catalog.pricing().refund(spent);

        self.snapshot.agents.retain(|a| a.habitat_id != id);
        self.snapshot.connections.retain(|c| !c.touches(id));
        self.snapshot.habitats.retain(|h| h.id != id);
        if self.connect.pending() == Some(id) {
            self.connect = ConnectMode::Idle;
        }
        self.credits = self.credits.saturating_add(refund);

        debug!(habitat = %id, refund, credits = self.credits, "Habitat removed");
        Ok(refund)
    }

    /// Move a habitat. Free.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownHabitat`].
    pub fn move_habitat(&mut self, id: HabitatId, position: Position) -> Result<(), BoardError> {
        let habitat = self
            .snapshot
            .habitats
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| reject("move_habitat", BoardError::UnknownHabitat(id)))?;
        habitat.position = position;
        Ok(())
    }

    /// Raise a habitat one level, adding one agent slot. Returns the new
    /// level.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownHabitat`], [`BoardError::MaxLevel`] or
    /// [`BoardError::InsufficientCredits`].
    pub fn upgrade_habitat(&mut self, id: HabitatId) -> Result<u8, BoardError> {
        const ACTION: &str = "upgrade_habitat";
        let level = self
            .snapshot
            .habitat(id)
            .map(|h| h.level)
            .ok_or_else(|| reject(ACTION, BoardError::UnknownHabitat(id)))?;
        if level >= MAX_LEVEL {
            return Err(reject(ACTION, BoardError::MaxLevel(id)));
        }
        let next = level.saturating_add(1);
        let cost = self
            .catalog
            .pricing()
            .upgrade_cost(next)
            .ok_or_else(|| reject(ACTION, BoardError::MaxLevel(id)))?;
        self.charge(cost).map_err(|err| reject(ACTION, err))?;

        if let Some(habitat) = self.snapshot.habitats.iter_mut().find(|h| h.id == id) {
            habitat.level = next;
        }
        debug!(habitat = %id, level = next, cost, credits = self.credits, "Habitat upgraded");
        Ok(next)
    }

    // -----------------------------------------------------------------------
    // Agents
    // -----------------------------------------------------------------------

    /// Place an agent into a habitat with a free slot.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownAgentType`], [`BoardError::UnknownHabitat`],
    /// [`BoardError::InsufficientCredits`] or [`BoardError::AtCapacity`].
    pub fn place_agent(
        &mut self,
        agent_type: AgentType,
        habitat_id: HabitatId,
    ) -> Result<AgentId, BoardError> {
        const ACTION: &str = "place_agent";
        let cost = self
            .catalog
            .agent(agent_type)
            .map(|d| d.cost)
            .ok_or_else(|| reject(ACTION, BoardError::UnknownAgentType(agent_type)))?;
        let habitat = self
            .snapshot
            .habitat(habitat_id)
            .ok_or_else(|| reject(ACTION, BoardError::UnknownHabitat(habitat_id)))?;
        if self.credits < cost {
            return Err(reject(
                ACTION,
                BoardError::InsufficientCredits {
                    needed: cost,
                    available: self.credits,
                },
            ));
        }
        let capacity = self.effective_capacity(habitat);
        if habitat.occupancy() >= capacity {
            return Err(reject(
                ACTION,
                BoardError::AtCapacity {
                    habitat: habitat_id,
                    capacity,
                },
            ));
        }
        self.charge(cost).map_err(|err| reject(ACTION, err))?;

        let id = AgentId::new();
        self.snapshot.agents.push(PlacedAgent {
            id,
            agent_type,
            habitat_id,
        });
        if let Some(habitat) = self
            .snapshot
            .habitats
            .iter_mut()
            .find(|h| h.id == habitat_id)
        {
            habitat.agents.push(id);
        }
        debug!(agent = %id, %agent_type, habitat = %habitat_id, cost, credits = self.credits, "Agent placed");
        Ok(id)
    }

    /// Remove an agent, refunding 70% of its cost rounded down. Returns the
    /// refund.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownAgent`].
    pub fn remove_agent(&mut self, id: AgentId) -> Result<u32, BoardError> {
        let agent = self
            .snapshot
            .agent(id)
            .ok_or_else(|| reject("remove_agent", BoardError::UnknownAgent(id)))?;
        let owner = agent.habitat_id;
        let refund = self
            .catalog
            .pricing()
            .refund(self.agent_cost(agent.agent_type));

        self.snapshot.agents.retain(|a| a.id != id);
        if let Some(habitat) = self.snapshot.habitats.iter_mut().find(|h| h.id == owner) {
            habitat.agents.retain(|a| *a != id);
        }
        self.credits = self.credits.saturating_add(refund);

        debug!(agent = %id, refund, credits = self.credits, "Agent removed");
        Ok(refund)
    }

    // -----------------------------------------------------------------------
    // Connections
    // -----------------------------------------------------------------------

    /// Begin a connection from `habitat`, replacing any pending attempt.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownHabitat`]; the pending attempt is kept.
    pub fn start_connection(&mut self, habitat: HabitatId) -> Result<(), BoardError> {
        if self.snapshot.habitat(habitat).is_none() {
            return Err(reject(
                "start_connection",
                BoardError::UnknownHabitat(habitat),
            ));
        }
        self.connect = ConnectMode::PendingFrom(habitat);
        Ok(())
    }

    /// Finish the pending connection at `target`.
    ///
    /// The pending attempt is cleared whatever the outcome. On success the
    /// connection cost is charged.
    ///
    /// # Errors
    ///
    /// [`BoardError::NoPendingConnection`], [`BoardError::SelfConnection`],
    /// [`BoardError::UnknownHabitat`], [`BoardError::DuplicateConnection`]
    /// or [`BoardError::InsufficientCredits`]. Nothing but the pending
    /// pointer changes on error.
    pub fn complete_connection(&mut self, target: HabitatId) -> Result<ConnectionId, BoardError> {
        const ACTION: &str = "complete_connection";
        let from = self
            .connect
            .take()
            .pending()
            .ok_or_else(|| reject(ACTION, BoardError::NoPendingConnection))?;
        if from == target {
            return Err(reject(ACTION, BoardError::SelfConnection(target)));
        }
        for end in [from, target] {
            if self.snapshot.habitat(end).is_none() {
                return Err(reject(ACTION, BoardError::UnknownHabitat(end)));
            }
        }
        if self.connection_between(from, target).is_some() {
            return Err(reject(
                ACTION,
                BoardError::DuplicateConnection { from, to: target },
            ));
        }
        let cost = self.catalog.pricing().connection_cost;
        self.charge(cost).map_err(|err| reject(ACTION, err))?;

        let id = ConnectionId::new();
        self.snapshot.connections.push(Connection {
            id,
            from,
            to: target,
        });
        debug!(connection = %id, %from, to = %target, cost, credits = self.credits, "Habitats connected");
        Ok(id)
    }

    /// Abandon the pending connection attempt, if any.
    pub const fn cancel_connection(&mut self) {
        self.connect = ConnectMode::Idle;
    }

    /// Remove a connection, refunding 70% of the connection cost rounded
    /// down. Returns the refund.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownConnection`]; nothing is refunded.
    pub fn remove_connection(&mut self, id: ConnectionId) -> Result<u32, BoardError> {
        if !self.snapshot.connections.iter().any(|c| c.id == id) {
            return Err(reject(
                "remove_connection",
                BoardError::UnknownConnection(id),
            ));
        }
        let pricing = self.catalog.pricing();
        let refund = pricing.refund(pricing.connection_cost);
        self.snapshot.connections.retain(|c| c.id != id);
        self.credits = self.credits.saturating_add(refund);

        debug!(connection = %id, refund, credits = self.credits, "Connection removed");
        Ok(refund)
    }

    // -----------------------------------------------------------------------
    // Countdown
    // -----------------------------------------------------------------------

    /// Start or resume the countdown.
    pub const fn resume_countdown(&mut self) {
        self.countdown.resume();
    }

    /// Pause the countdown.
    pub const fn pause_countdown(&mut self) {
        self.countdown.pause();
    }

    /// Advance the countdown by one second.
    pub const fn tick(&mut self) -> TickOutcome {
        self.countdown.tick()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn agent_cost(&self, agent_type: AgentType) -> u32 {
        self.catalog.agent(agent_type).map_or(0, |d| d.cost)
    }

    fn charge(&mut self, cost: u32) -> Result<(), BoardError> {
        self.credits = self
            .credits
            .checked_sub(cost)
            .ok_or(BoardError::InsufficientCredits {
                needed: cost,
                available: self.credits,
            })?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ecoarchitect_catalog::CONNECTION_COST;

    use super::*;

    fn board(credits: u32) -> Board {
        Board::new(Arc::new(Catalog::standard()), credits)
    }

    fn origin() -> Position {
        Position::default()
    }

    #[test]
    fn place_habitat_deducts_cost() {
        let mut b = board(100);
        let id = b.place_habitat(HabitatType::Payment, origin()).unwrap();
        assert_eq!(b.credits(), 50);
        let placed = b.habitat(id).unwrap();
        assert_eq!(placed.level, 1);
        assert!(placed.agents.is_empty());
    }

    #[test]
    fn unaffordable_habitat_changes_nothing() {
        let mut b = board(30);
        let err = b.place_habitat(HabitatType::Innovation, origin());
        assert_eq!(
            err,
            Err(BoardError::InsufficientCredits {
                needed: 60,
                available: 30
            })
        );
        assert_eq!(b.credits(), 30);
        assert!(b.snapshot().habitats.is_empty());
    }

    #[test]
    fn remove_habitat_cascades_and_refunds() {
        let mut b = board(500);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        let trust = b.place_habitat(HabitatType::Trust, origin()).unwrap();
        b.place_agent(AgentType::AnalyticsEngine, data).unwrap();
        b.start_connection(data).unwrap();
        b.complete_connection(trust).unwrap();
        let before = b.credits();

        // 70% of (35 + 20) = 38.5 -> 38
        assert_eq!(b.remove_habitat(data), Ok(38));
        assert_eq!(b.credits(), before.saturating_add(38));
        assert!(b.snapshot().agents.is_empty());
        assert!(b.snapshot().connections.is_empty());
        assert_eq!(b.snapshot().habitats.len(), 1);
    }

    #[test]
    fn remove_habitat_includes_upgrade_spend() {
        let mut b = board(500);
        let market = b.place_habitat(HabitatType::Marketplace, origin()).unwrap();
        b.upgrade_habitat(market).unwrap();
        b.upgrade_habitat(market).unwrap();
        // 70% of (40 + 80) = 84
        assert_eq!(b.remove_habitat(market), Ok(84));
    }

    #[test]
    fn removing_pending_source_clears_connection_attempt() {
        let mut b = board(100);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        b.start_connection(data).unwrap();
        b.remove_habitat(data).unwrap();
        assert_eq!(b.connect_mode(), ConnectMode::Idle);
    }

    #[test]
    fn move_is_free() {
        let mut b = board(100);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        let credits = b.credits();
        b.move_habitat(data, Position::new(10, -5)).unwrap();
        assert_eq!(b.habitat(data).unwrap().position, Position::new(10, -5));
        assert_eq!(b.credits(), credits);
        let stranger = HabitatId::new();
        assert_eq!(
            b.move_habitat(stranger, origin()),
            Err(BoardError::UnknownHabitat(stranger))
        );
    }

    #[test]
    fn upgrade_is_capped_at_level_three() {
        let mut b = board(1000);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        assert_eq!(b.upgrade_habitat(data), Ok(2));
        assert_eq!(b.upgrade_habitat(data), Ok(3));
        let credits = b.credits();
        assert_eq!(b.upgrade_habitat(data), Err(BoardError::MaxLevel(data)));
        assert_eq!(b.credits(), credits);
        assert_eq!(b.effective_capacity(b.habitat(data).unwrap()), 5);
    }

    #[test]
    fn full_habitat_rejects_agents() {
        let mut b = board(1000);
        let payment = b.place_habitat(HabitatType::Payment, origin()).unwrap();
        for _ in 0..3 {
            b.place_agent(AgentType::PaymentGateway, payment).unwrap();
        }
        let credits = b.credits();
        assert_eq!(
            b.place_agent(AgentType::PaymentGateway, payment),
            Err(BoardError::AtCapacity {
                habitat: payment,
                capacity: 3
            })
        );
        assert_eq!(b.credits(), credits);
        assert_eq!(b.agents_in(payment).len(), 3);
    }

    #[test]
    fn remove_agent_refunds_and_detaches() {
        let mut b = board(100);
        let trust = b.place_habitat(HabitatType::Trust, origin()).unwrap();
        let auth = b.place_agent(AgentType::UserAuth, trust).unwrap();
        assert_eq!(b.remove_agent(auth), Ok(10));
        assert!(b.habitat(trust).unwrap().agents.is_empty());
        assert_eq!(b.remove_agent(auth), Err(BoardError::UnknownAgent(auth)));
    }

    #[test]
    fn self_connection_clears_pending() {
        let mut b = board(100);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        b.start_connection(data).unwrap();
        assert_eq!(
            b.complete_connection(data),
            Err(BoardError::SelfConnection(data))
        );
        assert_eq!(b.connect_mode(), ConnectMode::Idle);
    }

    #[test]
    fn complete_without_start_is_rejected() {
        let mut b = board(100);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        assert_eq!(
            b.complete_connection(data),
            Err(BoardError::NoPendingConnection)
        );
    }

    #[test]
    fn unaffordable_connection_clears_pending_without_charge() {
        let mut b = board(80);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        let trust = b.place_habitat(HabitatType::Trust, origin()).unwrap();
        assert!(b.credits() < CONNECTION_COST);
        b.start_connection(data).unwrap();
        assert!(matches!(
            b.complete_connection(trust),
            Err(BoardError::InsufficientCredits { .. })
        ));
        assert_eq!(b.connect_mode(), ConnectMode::Idle);
        assert!(b.snapshot().connections.is_empty());
    }

    #[test]
    fn starting_again_replaces_source() {
        let mut b = board(200);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        let trust = b.place_habitat(HabitatType::Trust, origin()).unwrap();
        b.start_connection(data).unwrap();
        b.start_connection(trust).unwrap();
        assert_eq!(b.connect_mode(), ConnectMode::PendingFrom(trust));
        assert!(b.start_connection(HabitatId::new()).is_err());
        assert_eq!(b.connect_mode(), ConnectMode::PendingFrom(trust));
        b.cancel_connection();
        assert_eq!(b.connect_mode(), ConnectMode::Idle);
    }

    #[test]
    fn unknown_connection_removal_refunds_nothing() {
        let mut b = board(50);
        assert!(b.remove_connection(ConnectionId::new()).is_err());
        assert_eq!(b.credits(), 50);
    }

    #[test]
    fn credits_spent_tracks_net_spend() {
        let mut b = board(100);
        let data = b.place_habitat(HabitatType::Data, origin()).unwrap();
        assert_eq!(b.credits_spent(), 35);
        b.remove_habitat(data).unwrap();
        // 35 - floor(35 * 0.7) = 35 - 24
        assert_eq!(b.credits_spent(), 11);
    }
}
