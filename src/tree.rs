//! Game tree data structure and its builder.
//!
//! Nodes live in an arena and are addressed by [`NodeId`] handles. A child is
//! always stored after its parent, so folding the arena from the last node to
//! the first visits every child before its parent.

use std::{collections::VecDeque, fmt};

use crate::{AiError, Cell, Move, Result, Simulator, State, Tile};

/// Handle of a node inside a [`GameTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId{
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize{
        self.0
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self{
        NodeId(index)
    }
}

impl fmt::Display for NodeId{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        write!(f, "#{}", self.0)
    }
}

/// Who acts at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind{
    /// The player picks a move.
    Decision,
    /// The game spawns a tile on an empty cell.
    Chance
}

/// The edge leading from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label{
    /// A player move, below a decision node.
    Move(Move),
    /// A spawned tile position, below a chance node. Not a player action.
    Spawn(Cell)
}

/// Ordered children of a node, tagged with the node's kind.
///
/// An empty list marks a terminal node: either the depth budget ran out,
/// or there was no legal move (decision) or no empty cell (chance).
#[derive(Debug, Clone, PartialEq)]
pub enum Branches{
    Decision(Vec<(Move, NodeId)>),
    Chance(Vec<(Cell, NodeId)>)
}

impl Branches{
    fn new(kind: PlayerKind) -> Self{
        match kind {
            PlayerKind::Decision => Branches::Decision(Vec::new()),
            PlayerKind::Chance => Branches::Chance(Vec::new())
        }
    }

    #[inline]
    pub fn kind(&self) -> PlayerKind{
        match self {
            Branches::Decision(_) => PlayerKind::Decision,
            Branches::Chance(_) => PlayerKind::Chance
        }
    }

    #[inline]
    pub fn len(&self) -> usize{
        match self {
            Branches::Decision(children) => children.len(),
            Branches::Chance(children) => children.len()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool{
        self.len() == 0
    }

    /// Children handles in stored order.
    pub fn child_ids(&self) -> Vec<NodeId>{
        match self {
            Branches::Decision(children) => children.iter().map(|&(_, id)| id).collect(),
            Branches::Chance(children) => children.iter().map(|&(_, id)| id).collect()
        }
    }
}

/// A node of the game tree: an owned state snapshot and its children.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode{
    state: State,
    depth: usize,
    branches: Branches
}

impl TreeNode{
    fn new(state: State, kind: PlayerKind, depth: usize) -> Self{
        TreeNode { state, depth, branches: Branches::new(kind) }
    }

    #[inline]
    pub fn state(&self) -> &State{
        &self.state
    }

    #[inline]
    pub fn kind(&self) -> PlayerKind{
        self.branches.kind()
    }

    #[inline]
    pub fn branches(&self) -> &Branches{
        &self.branches
    }

    /// Distance from the root, in plies.
    #[inline]
    pub fn depth(&self) -> usize{
        self.depth
    }

    /// Checks if this node has no children.
    #[inline]
    pub fn is_terminal(&self) -> bool{
        self.branches.is_empty()
    }
}

/// Applies actions to states through a simulator, one snapshot at a time.
///
/// The wrapped simulator is reset to the given state before every action, so
/// each call behaves like a pure function of its arguments no matter what the
/// simulator held before.
pub struct Transitions<'a, S: Simulator + ?Sized>{
    simulator: &'a mut S
}

impl<'a, S: Simulator + ?Sized> Transitions<'a, S>{
    pub fn new(simulator: &'a mut S) -> Self{
        Transitions { simulator }
    }

    /// Returns the state reached by playing `direction` from `state`,
    /// or `None` if the move leaves the board unchanged.
    pub fn after_move(&mut self, state: &State, direction: Move) -> Option<State>{
        self.simulator.set_state(state);
        if self.simulator.make_move(direction) {
            Some(self.simulator.current_state())
        }
        else{
            None
        }
    }

    /// Returns `state` with `value` written at `cell`.
    pub fn after_spawn(&mut self, state: &State, cell: Cell, value: Tile) -> State{
        self.simulator.set_state(state);
        self.simulator.set_tile(cell, value);
        self.simulator.current_state()
    }

    /// Empty cells of `state`, in the simulator's order.
    pub fn open_cells(&mut self, state: &State) -> Vec<Cell>{
        self.simulator.set_state(state);
        self.simulator.open_tiles()
    }
}

/// A fully materialized expectimax game tree.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTree{
    nodes: Vec<TreeNode>
}

impl GameTree{
    /// Handle of the root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates a tree holding only a root node.
    ///
    /// # Parameters
    /// - `state`: The state of the root.
    /// - `kind`: Who acts at the root.
    pub fn new(state: State, kind: PlayerKind) -> Self{
        GameTree { nodes: vec![TreeNode::new(state, kind, 0)] }
    }

    /// Builds the tree of every state reachable from `state` within `depth` plies.
    ///
    /// Decision nodes get one child per move that changes the board, in
    /// [`Move::ALL`] order. Chance nodes get one child per empty cell, in the
    /// simulator's order, where `spawn_value` was placed. Nodes are expanded
    /// breadth-first from an explicit worklist.
    ///
    /// # Parameters
    /// - `simulator`: The simulator used to compute moves and spawns. Its state
    ///                is overwritten.
    /// - `state`: The state of the root.
    /// - `kind`: Who acts at the root.
    /// - `depth`: The number of plies to expand below the root.
    /// - `spawn_value`: The tile value placed by chance nodes.
    ///
    /// # Returns
    /// The built tree, or `Err(AiError::InvalidSpawnValue(_))` if `spawn_value`
    /// is not a power of two of at least 2.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::{Board, Game2048, GameTree, PlayerKind, State};
    /// let state = State::new(Board::from_rows(vec![vec![2, 0], vec![0, 0]]).unwrap(), 0);
    /// let mut simulator = Game2048::new(2);
    /// let tree = GameTree::build(&mut simulator, state, PlayerKind::Decision, 2, 2).unwrap();
    /// // root, 2 legal moves, 3 spawns below each
    /// assert_eq!(tree.len(), 1 + 2 + 6);
    /// ```
    pub fn build<S: Simulator + ?Sized>(simulator: &mut S, state: State, kind: PlayerKind, depth: usize, spawn_value: Tile) -> Result<Self>{
        if spawn_value < 2 || !spawn_value.is_power_of_two() {
            return Err(AiError::InvalidSpawnValue(spawn_value));
        }

        let mut tree = GameTree::new(state, kind);
        let mut transitions = Transitions::new(simulator);
        let mut worklist = VecDeque::from([(Self::ROOT, depth)]);

        while let Some((id, remaining)) = worklist.pop_front(){
            if remaining == 0 {
                continue;
            }

            let children: Vec<(Label, State)> = {
                let node = &tree.nodes[id.0];
                match node.kind() {
                    PlayerKind::Decision => Move::ALL.iter()
                        .filter_map(|&direction|{
                            transitions.after_move(&node.state, direction).map(|next| (Label::Move(direction), next))
                        })
                        .collect(),
                    PlayerKind::Chance => transitions.open_cells(&node.state)
                        .into_iter()
                        .map(|cell| (Label::Spawn(cell), transitions.after_spawn(&node.state, cell, spawn_value)))
                        .collect()
                }
            };

            for (label, next) in children{
                let child = tree.add_child(id, label, next)?;
                worklist.push_back((child, remaining - 1));
            }
        }

        log::debug!("built game tree: {} nodes, depth {}", tree.len(), tree.max_depth());
        Ok(tree)
    }

    /// Appends a child to `parent`, after its existing children.
    ///
    /// The child's kind is deduced from the label: a move leads to a chance
    /// node, a spawn leads to a decision node.
    ///
    /// # Parameters
    /// - `parent`: The node receiving the child.
    /// - `label`: The edge from `parent` to the child.
    /// - `state`: The state of the child.
    ///
    /// # Returns
    /// The handle of the new child.
    /// `Err(AiError::UnknownNode(_))` if `parent` is not in this tree.
    /// `Err(AiError::LabelMismatch(_))` if the label does not fit the kind of `parent`.
    pub fn add_child(&mut self, parent: NodeId, label: Label, state: State) -> Result<NodeId>{
        let child = NodeId(self.nodes.len());
        let node = self.nodes.get_mut(parent.0).ok_or(AiError::UnknownNode(parent))?;

        let kind = match (&mut node.branches, label) {
            (Branches::Decision(children), Label::Move(direction)) => {
                children.push((direction, child));
                PlayerKind::Chance
            }
            (Branches::Chance(children), Label::Spawn(cell)) => {
                children.push((cell, child));
                PlayerKind::Decision
            }
            _ => return Err(AiError::LabelMismatch(parent))
        };

        let depth = node.depth + 1;
        self.nodes.push(TreeNode::new(state, kind, depth));
        Ok(child)
    }

    /// Gets the node behind a handle.
    ///
    /// # Returns
    /// The node, or `Err(AiError::UnknownNode(_))` if the handle is not in this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> Result<&TreeNode>{
        self.nodes.get(id.0).ok_or(AiError::UnknownNode(id))
    }

    #[inline]
    pub fn root(&self) -> &TreeNode{
        &self.nodes[Self::ROOT.0]
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize{
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool{
        self.nodes.is_empty()
    }

    /// Depth of the deepest node.
    pub fn max_depth(&self) -> usize{
        self.nodes.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn nodes(&self) -> &[TreeNode]{
        &self.nodes
    }
}
