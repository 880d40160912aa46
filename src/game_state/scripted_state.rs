//! Hand-built game trees.
//!
//! `ScriptedState` implements [`GameState`] over an explicit tree so search
//! behaviour (move order, ties, pruning, terminal handling) can be pinned
//! without constructing real board positions. Every node lists its active
//! player, its children in generator order, the opponent's moves and a blank
//! cell count. The tree also counts `legal_moves` probes, which lets callers
//! assert that no search happened at all.

use std::cell::Cell;
use std::rc::Rc;

use crate::game_state::board_types::{Move, PlayerId};
use crate::game_state::game_state::GameState;

pub type NodeId = usize;

#[derive(Debug, Clone)]
struct ScriptedNode {
    active: PlayerId,
    blank_cells: usize,
    children: Vec<(Move, NodeId)>,
    opponent_moves: Vec<Move>,
}

#[derive(Debug, Default)]
pub struct ScriptedTree {
    nodes: Vec<ScriptedNode>,
    probes: Cell<usize>,
}

impl ScriptedTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with no children yet and returns its id.
    pub fn add_node(&mut self, active: PlayerId, blank_cells: usize) -> NodeId {
        self.nodes.push(ScriptedNode {
            active,
            blank_cells,
            children: Vec::new(),
            opponent_moves: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Adds a child reached from `parent` by `mv`. The child's active player
    /// is the parent's opponent.
    pub fn add_child(&mut self, parent: NodeId, mv: Move, blank_cells: usize) -> NodeId {
        let active = self.nodes[parent].active.opponent();
        let child = self.add_node(active, blank_cells);
        self.nodes[parent].children.push((mv, child));
        child
    }

    /// Sets the moves reported for the inactive player at `node`.
    pub fn set_opponent_moves(&mut self, node: NodeId, moves: Vec<Move>) {
        self.nodes[node].opponent_moves = moves;
    }

    /// Freezes the tree and returns the state positioned at `root`.
    pub fn into_state(self, root: NodeId) -> ScriptedState {
        ScriptedState {
            tree: Rc::new(self),
            node: Some(root),
        }
    }
}

/// A position inside a [`ScriptedTree`].
///
/// Forecasting a move the script does not list lands on a dead end: a
/// terminal position with no moves for anyone.
#[derive(Debug, Clone)]
pub struct ScriptedState {
    tree: Rc<ScriptedTree>,
    node: Option<NodeId>,
}

impl ScriptedState {
    pub fn node_id(&self) -> Option<NodeId> {
        self.node
    }

    /// How many times `legal_moves` has been called on any state of this tree.
    pub fn probe_count(&self) -> usize {
        self.tree.probes.get()
    }

    pub fn at(&self, node: NodeId) -> ScriptedState {
        ScriptedState {
            tree: Rc::clone(&self.tree),
            node: Some(node),
        }
    }

    fn scripted(&self) -> Option<&ScriptedNode> {
        self.node.and_then(|id| self.tree.nodes.get(id))
    }

    // Terminal checks must not count as probes.
    fn has_no_children(&self) -> bool {
        self.scripted().map_or(true, |node| node.children.is_empty())
    }
}

impl GameState for ScriptedState {
    fn active_player(&self) -> PlayerId {
        self.scripted()
            .map_or(PlayerId::Player1, |node| node.active)
    }

    fn inactive_player(&self) -> PlayerId {
        self.active_player().opponent()
    }

    fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        self.tree.probes.set(self.tree.probes.get() + 1);
        match self.scripted() {
            Some(node) if node.active == player => {
                node.children.iter().map(|(mv, _)| *mv).collect()
            }
            Some(node) => node.opponent_moves.clone(),
            None => Vec::new(),
        }
    }

    fn blank_cell_count(&self) -> usize {
        self.scripted().map_or(0, |node| node.blank_cells)
    }

    fn forecast(&self, mv: Move) -> Self {
        let next = self.scripted().and_then(|node| {
            node.children
                .iter()
                .find(|(child_mv, _)| *child_mv == mv)
                .map(|(_, child)| *child)
        });
        ScriptedState {
            tree: Rc::clone(&self.tree),
            node: next,
        }
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active_player() && self.has_no_children()
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        player == self.inactive_player() && self.has_no_children()
    }
}
