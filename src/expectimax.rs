//! Implementation of the expectimax evaluation and of the move-selecting AI.
//!
//! Evaluation is a bottom-up fold over a built [`GameTree`]: terminal nodes take
//! the value given by a [`LeafEvaluator`], decision nodes the maximum of their
//! children and chance nodes the plain mean of their children. The fold never
//! mutates the tree, so it works just as well on hand-built trees.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    simulator::DEFAULT_SPAWN_VALUE, AiError, Branches, Game2048, GameTree, HeuristicEvaluator, LeafEvaluator,
    Move, NodeId, PlayerKind, Result, ScoreEvaluator, Simulator, State, Tile, TreeNode
};

/// Result of evaluating a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation{
    /// The move leading to the best child. Always `None` for chance and terminal nodes.
    pub best_move: Option<Move>,
    /// The expectimax value of the node.
    pub value: f64
}

/// Which leaf values the search propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy{
    /// Leaves are worth their game score.
    #[default]
    Exact,
    /// Leaves are worth their heuristic estimate.
    Heuristic
}

/// Picks the first child holding the maximum value.
///
/// A later child only replaces the current best when its value is strictly
/// greater, so ties go to the earliest move in stored order.
fn best_branch(children: &[(Move, NodeId)], values: &[f64]) -> (Option<Move>, f64){
    let mut best_move = None;
    let mut best_value = f64::NEG_INFINITY;

    for &(direction, child) in children{
        let value = values[child.index()];
        if value > best_value {
            best_move = Some(direction);
            best_value = value;
        }
    }

    (best_move, best_value)
}

/// Mean of the children values, every child weighing the same.
///
/// # Returns
/// `Err(AiError::EmptyChanceNode(_))` if there is nothing to average.
fn chance_value<I: Iterator<Item = f64>>(id: NodeId, values: I) -> Result<f64>{
    let (total, count) = values.fold((0.0, 0usize), |(total, count), value| (total + value, count + 1));

    if count == 0 {
        Err(AiError::EmptyChanceNode(id))
    }
    else{
        Ok(total / count as f64)
    }
}

impl GameTree{
    /// Evaluates the root of the tree.
    ///
    /// # Parameters
    /// - `evaluator`: The value given to terminal nodes.
    ///
    /// # Returns
    /// The best move at the root (if it is a decision node with children) and its value.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::{Board, GameTree, Label, Move, PlayerKind, ScoreEvaluator, State};
    /// let board = Board::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
    /// let mut tree = GameTree::new(State::new(board.clone(), 0), PlayerKind::Decision);
    /// tree.add_child(GameTree::ROOT, Label::Move(Move::Left), State::new(board.clone(), 4)).unwrap();
    /// tree.add_child(GameTree::ROOT, Label::Move(Move::Down), State::new(board, 0)).unwrap();
    ///
    /// let evaluation = tree.evaluate(&ScoreEvaluator).unwrap();
    /// assert_eq!(evaluation.best_move, Some(Move::Left));
    /// assert_eq!(evaluation.value, 4.0);
    /// ```
    pub fn evaluate<E: LeafEvaluator + ?Sized>(&self, evaluator: &E) -> Result<Evaluation>{
        self.evaluate_node(GameTree::ROOT, evaluator)
    }

    /// Evaluates the subtree rooted at `id`.
    ///
    /// Values are computed iteratively from the last node of the arena down to
    /// `id`; every descendant of `id` sits after it.
    ///
    /// # Returns
    /// `Err(AiError::UnknownNode(_))` if `id` is not in this tree.
    pub fn evaluate_node<E: LeafEvaluator + ?Sized>(&self, id: NodeId, evaluator: &E) -> Result<Evaluation>{
        self.node(id)?;

        let nodes = self.nodes();
        let mut values = vec![0.0; nodes.len()];
        for index in (id.index()..nodes.len()).rev(){
            let value = Self::node_value(index, &nodes[index], &values, evaluator)?;
            values[index] = value;
        }

        Ok(Self::evaluation_of(&nodes[id.index()], id, &values))
    }

    /// Evaluates the root of the tree, folding each depth level in parallel.
    ///
    /// Nodes of one level only depend on the level below, so every level is
    /// computed with rayon once the deeper one is done. Gives the same result as
    /// [`GameTree::evaluate`].
    #[cfg(feature = "parallel")]
    pub fn evaluate_par<E: LeafEvaluator + Sync + ?Sized>(&self, evaluator: &E) -> Result<Evaluation>{
        let nodes = self.nodes();

        let mut levels: Vec<Vec<usize>> = vec![Vec::new(); self.max_depth() + 1];
        for (index, node) in nodes.iter().enumerate(){
            levels[node.depth()].push(index);
        }

        let mut values = vec![0.0; nodes.len()];
        for level in levels.iter().rev(){
            let computed = level.par_iter()
                .map(|&index| Self::node_value(index, &nodes[index], &values, evaluator).map(|value| (index, value)))
                .collect::<Result<Vec<(usize, f64)>>>()?;

            for (index, value) in computed{
                values[index] = value;
            }
        }

        Ok(Self::evaluation_of(self.root(), GameTree::ROOT, &values))
    }

    /// Value of one node, given the values of all its children.
    fn node_value<E: LeafEvaluator + ?Sized>(index: usize, node: &TreeNode, values: &[f64], evaluator: &E) -> Result<f64>{
        if node.is_terminal() {
            return Ok(evaluator.leaf_value(node.state()));
        }

        match node.branches() {
            Branches::Decision(children) => Ok(best_branch(children, values).1),
            Branches::Chance(children) => chance_value(
                NodeId::from_index(index),
                children.iter().map(|&(_, child)| values[child.index()])
            )
        }
    }

    fn evaluation_of(node: &TreeNode, id: NodeId, values: &[f64]) -> Evaluation{
        match node.branches() {
            Branches::Decision(children) if !children.is_empty() => {
                let (best_move, value) = best_branch(children, values);
                Evaluation { best_move, value }
            }
            _ => Evaluation { best_move: None, value: values[id.index()] }
        }
    }
}

/// Configuration parameters of an [`Ai`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig{
    /// The number of plies (moves and spawns) expanded below the root.
    ///
    /// The tree grows exponentially with it: up to 4 moves times the number of
    /// empty cells per pair of plies.
    pub search_depth: usize,
    /// The tile value placed by chance nodes.
    pub spawn_value: Tile
}

impl AiConfig{
    /// The default configuration.
    ///
    /// - `search_depth`: 3.
    /// - `spawn_value`: 2, the only value the reference simulator spawns.
    pub const DEFAULT: AiConfig = AiConfig{
        search_depth: 3,
        spawn_value: DEFAULT_SPAWN_VALUE
    };
}

impl Default for AiConfig{
    fn default() -> Self{
        Self::DEFAULT
    }
}

/// Expectimax player choosing the next move from a configured root state.
///
/// # Type Parameters
/// - `S`: The simulator used to expand the game tree.
pub struct Ai<S: Simulator>{
    root_state: State,
    simulator: S,
    config: AiConfig,
    tree: Option<GameTree>
}

impl Ai<Game2048>{
    /// Creates an AI for `root_state` using the reference simulator and the default configuration.
    #[inline]
    pub fn from_state(root_state: State) -> Self{
        Self::from_state_with_config(root_state, &AiConfig::DEFAULT)
    }

    /// Creates an AI for `root_state` using the reference simulator and a custom configuration.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::{Ai, AiConfig, Board, Move, State};
    /// let board = Board::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
    /// let config = AiConfig { search_depth: 1, ..AiConfig::DEFAULT };
    /// let mut ai = Ai::from_state_with_config(State::new(board, 0), &config);
    /// assert_eq!(ai.compute_decision().unwrap(), Some(Move::Left));
    /// ```
    #[inline]
    pub fn from_state_with_config(root_state: State, config: &AiConfig) -> Self{
        let simulator = Game2048::from_state(root_state.clone()).with_spawn_value(config.spawn_value);
        Self::with_config(root_state, simulator, config)
    }
}

impl<S: Simulator> Ai<S>{
    /// Creates an AI with the default configuration.
    ///
    /// # Parameters
    /// - `root_state`: The observed state to choose a move for.
    /// - `simulator`: The simulator used to expand the game tree.
    #[inline]
    pub fn new(root_state: State, simulator: S) -> Self{
        Self::with_config(root_state, simulator, &AiConfig::DEFAULT)
    }

    /// Creates an AI from a specified configuration.
    #[inline]
    pub fn with_config(root_state: State, simulator: S, config: &AiConfig) -> Self{
        Ai { root_state, simulator, config: *config, tree: None }
    }

    #[inline]
    pub fn root_state(&self) -> &State{
        &self.root_state
    }

    #[inline]
    pub fn config(&self) -> &AiConfig{
        &self.config
    }

    /// The tree built by the last call to [`Ai::build_tree`], if any.
    #[inline]
    pub fn tree(&self) -> Option<&GameTree>{
        self.tree.as_ref()
    }

    /// Moves the AI to a new root state, discarding the current tree.
    pub fn set_root_state(&mut self, root_state: State){
        self.root_state = root_state;
        self.tree = None;
    }

    /// Gives back the simulator.
    pub fn into_simulator(self) -> S{
        self.simulator
    }

    /// Builds the game tree from the root state down to the configured depth.
    ///
    /// Any previous tree is replaced, so every node is expanded exactly once.
    pub fn build_tree(&mut self) -> Result<&GameTree>{
        let tree = GameTree::build(
            &mut self.simulator,
            self.root_state.clone(),
            PlayerKind::Decision,
            self.config.search_depth,
            self.config.spawn_value
        )?;
        let tree: &GameTree = self.tree.insert(tree);
        Ok(tree)
    }

    /// Evaluates the built tree with leaves worth their game score.
    ///
    /// # Returns
    /// `Err(AiError::TreeNotBuilt)` if [`Ai::build_tree`] was not called first.
    #[inline]
    pub fn expectimax(&self) -> Result<Evaluation>{
        self.evaluate(Strategy::Exact)
    }

    /// Evaluates the built tree with leaves worth their heuristic estimate.
    ///
    /// # Returns
    /// `Err(AiError::TreeNotBuilt)` if [`Ai::build_tree`] was not called first.
    #[inline]
    pub fn expectimax_heuristic(&self) -> Result<Evaluation>{
        self.evaluate(Strategy::Heuristic)
    }

    /// Evaluates the built tree with the given strategy.
    pub fn evaluate(&self, strategy: Strategy) -> Result<Evaluation>{
        let tree = self.tree.as_ref().ok_or(AiError::TreeNotBuilt)?;

        match strategy {
            Strategy::Exact => fold(tree, &ScoreEvaluator),
            Strategy::Heuristic => fold(tree, &HeuristicEvaluator)
        }
    }

    /// Builds the tree and returns the move maximizing the expected score.
    ///
    /// # Returns
    /// The best move, or `None` when the root has no legal move or the search depth is 0.
    #[inline]
    pub fn compute_decision(&mut self) -> Result<Option<Move>>{
        self.compute_decision_with(Strategy::Exact)
    }

    /// Builds the tree and returns the move maximizing the expected heuristic value.
    #[inline]
    pub fn compute_decision_heuristic(&mut self) -> Result<Option<Move>>{
        self.compute_decision_with(Strategy::Heuristic)
    }

    /// Builds the tree and returns the best move under `strategy`.
    pub fn compute_decision_with(&mut self, strategy: Strategy) -> Result<Option<Move>>{
        self.build_tree()?;
        let evaluation = self.evaluate(strategy)?;

        log::trace!("{:?} decision: {:?} (value {})", strategy, evaluation.best_move, evaluation.value);
        Ok(evaluation.best_move)
    }
}

#[cfg(not(feature = "parallel"))]
#[inline]
fn fold<E: LeafEvaluator + Sync>(tree: &GameTree, evaluator: &E) -> Result<Evaluation>{
    tree.evaluate(evaluator)
}

#[cfg(feature = "parallel")]
#[inline]
fn fold<E: LeafEvaluator + Sync>(tree: &GameTree, evaluator: &E) -> Result<Evaluation>{
    tree.evaluate_par(evaluator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{heuristic, test_utils::{board, compare_f64, state}, Label};

    fn ai(rows: &[&[Tile]], score: u64, search_depth: usize) -> Ai<Game2048>{
        let config = AiConfig { search_depth, ..AiConfig::DEFAULT };
        Ai::from_state_with_config(state(rows, score), &config)
    }

    #[test]
    fn test_best_branch_first_max_wins(){
        let values = [0.0, 5.0, 7.0, 7.0];
        let children = [(Move::Up, NodeId::from_index(1)), (Move::Left, NodeId::from_index(2)), (Move::Down, NodeId::from_index(3))];

        assert_eq!(best_branch(&children, &values), (Some(Move::Left), 7.0));
        assert_eq!(best_branch(&[], &values), (None, f64::NEG_INFINITY));
    }

    #[test]
    fn test_chance_value_mean(){
        let (a, b, c) = (3.0, 10.0, 1024.0);
        assert_eq!(chance_value(NodeId::from_index(0), [a, b, c].into_iter()), Ok((a + b + c) / 3.0));
    }

    #[test]
    fn test_chance_value_empty_is_error(){
        assert_eq!(chance_value(NodeId::from_index(4), std::iter::empty()), Err(AiError::EmptyChanceNode(NodeId::from_index(4))));
    }

    #[test]
    fn test_evaluate_terminal_root(){
        let tree = GameTree::new(state(&[&[2, 0], &[0, 0]], 12), PlayerKind::Decision);
        let evaluation = tree.evaluate(&ScoreEvaluator).unwrap();

        assert_eq!(evaluation, Evaluation { best_move: None, value: 12.0 });
    }

    #[test]
    fn test_evaluate_hand_built_chance_mean(){
        let empty = board(&[&[0, 0], &[0, 0]]);
        let mut tree = GameTree::new(State::new(empty.clone(), 0), PlayerKind::Chance);
        for (cell, score) in [((0, 0), 8), ((0, 1), 20), ((1, 0), 2)]{
            tree.add_child(GameTree::ROOT, Label::Spawn(cell), State::new(empty.clone(), score)).unwrap();
        }

        let evaluation = tree.evaluate(&ScoreEvaluator).unwrap();
        assert_eq!(evaluation, Evaluation { best_move: None, value: (8.0 + 20.0 + 2.0) / 3.0 });
    }

    #[test]
    fn test_evaluate_hand_built_tie_break(){
        let empty = board(&[&[0, 0], &[0, 0]]);
        let mut tree = GameTree::new(State::new(empty.clone(), 0), PlayerKind::Decision);
        tree.add_child(GameTree::ROOT, Label::Move(Move::Up), State::new(empty.clone(), 5)).unwrap();
        tree.add_child(GameTree::ROOT, Label::Move(Move::Down), State::new(empty.clone(), 9)).unwrap();
        tree.add_child(GameTree::ROOT, Label::Move(Move::Right), State::new(empty, 9)).unwrap();

        let evaluation = tree.evaluate(&ScoreEvaluator).unwrap();
        assert_eq!(evaluation, Evaluation { best_move: Some(Move::Down), value: 9.0 });
    }

    #[test]
    fn test_evaluate_node_subtree_and_unknown(){
        let empty = board(&[&[0, 0], &[0, 0]]);
        let mut tree = GameTree::new(State::new(empty.clone(), 0), PlayerKind::Decision);
        let chance = tree.add_child(GameTree::ROOT, Label::Move(Move::Left), State::new(empty.clone(), 0)).unwrap();
        tree.add_child(chance, Label::Spawn((0, 0)), State::new(empty.clone(), 4)).unwrap();
        tree.add_child(chance, Label::Spawn((1, 1)), State::new(empty, 8)).unwrap();

        assert_eq!(tree.evaluate_node(chance, &ScoreEvaluator).unwrap(), Evaluation { best_move: None, value: 6.0 });
        assert_eq!(tree.evaluate(&ScoreEvaluator).unwrap(), Evaluation { best_move: Some(Move::Left), value: 6.0 });
        assert_eq!(tree.evaluate_node(NodeId::from_index(9), &ScoreEvaluator), Err(AiError::UnknownNode(NodeId::from_index(9))));
    }

    #[test]
    fn test_evaluate_before_build(){
        let ai = ai(&[&[2, 0], &[0, 0]], 0, 2);

        assert!(ai.tree().is_none());
        assert_eq!(ai.expectimax(), Err(AiError::TreeNotBuilt));
        assert_eq!(ai.expectimax_heuristic(), Err(AiError::TreeNotBuilt));
    }

    #[test]
    fn test_decision_with_legal_moves(){
        let boards: [&[&[Tile]]; 3] = [
            &[&[2, 0], &[0, 0]],
            &[&[2, 4, 8], &[0, 2, 4], &[0, 0, 2]],
            &[&[2, 4, 2, 4], &[4, 2, 4, 2], &[2, 4, 2, 4], &[4, 2, 4, 0]]
        ];

        for rows in boards{
            let mut exact = ai(rows, 0, 3);
            assert!(exact.compute_decision().unwrap().is_some());

            let mut heuristic = ai(rows, 0, 3);
            assert!(heuristic.compute_decision_heuristic().unwrap().is_some());
        }
    }

    #[test]
    fn test_decision_stuck_board(){
        let mut ai = ai(&[&[2, 4], &[4, 2]], 16, 3);

        assert_eq!(ai.compute_decision().unwrap(), None);
        assert_eq!(ai.compute_decision_heuristic().unwrap(), None);
        assert_eq!(ai.expectimax().unwrap(), Evaluation { best_move: None, value: 16.0 });
    }

    #[test]
    fn test_decision_depth_zero(){
        let mut ai = ai(&[&[2, 0], &[0, 0]], 0, 0);

        assert_eq!(ai.compute_decision().unwrap(), None);
        assert_eq!(ai.compute_decision_heuristic().unwrap(), None);
        assert_eq!(ai.tree().map(GameTree::len), Some(1));
    }

    #[test]
    fn test_decision_tie_break_on_symmetric_board(){
        // Down and Right are mirror images of each other: Down comes first in Move::ALL
        let mut exact = ai(&[&[2, 0], &[0, 0]], 0, 3);
        assert_eq!(exact.compute_decision().unwrap(), Some(Move::Down));

        let mut heuristic = ai(&[&[2, 0], &[0, 0]], 0, 2);
        assert_eq!(heuristic.compute_decision_heuristic().unwrap(), Some(Move::Down));
    }

    #[test]
    fn test_decision_prefers_merge(){
        let mut ai = ai(&[&[2, 2], &[0, 0]], 0, 1);

        assert_eq!(ai.compute_decision().unwrap(), Some(Move::Left));
        assert_eq!(ai.expectimax().unwrap().value, 4.0);
    }

    #[test]
    fn test_end_to_end_exact_depth_two(){
        let mut ai = ai(&[&[2, 0], &[0, 0]], 0, 2);
        let tree = ai.build_tree().unwrap();

        // root, Down and Right, three spawns under each
        assert_eq!(tree.len(), 9);
        let Branches::Decision(children) = tree.root().branches() else { panic!("root must be a decision node") };
        assert_eq!(children.iter().map(|&(direction, _)| direction).collect::<Vec<_>>(), vec![Move::Down, Move::Right]);

        let (_, down) = children[0];
        let spawned: Vec<State> = tree.node(down).unwrap().branches().child_ids().into_iter()
            .map(|id| tree.node(id).unwrap().state().clone())
            .collect();
        assert_eq!(spawned, vec![
            state(&[&[2, 0], &[2, 0]], 0),
            state(&[&[0, 2], &[2, 0]], 0),
            state(&[&[0, 0], &[2, 2]], 0)
        ]);

        // no merge is reachable in two plies: every leaf is worth 0
        assert_eq!(ai.expectimax().unwrap(), Evaluation { best_move: Some(Move::Down), value: 0.0 });
    }

    #[test]
    fn test_end_to_end_heuristic_depth_two(){
        let mut ai = ai(&[&[2, 0], &[0, 0]], 0, 2);
        ai.build_tree().unwrap();

        // Down leaves: [[2, 0], [2, 0]], [[0, 2], [2, 0]], [[0, 0], [2, 2]]
        let down_leaves = [
            heuristic(&state(&[&[2, 0], &[2, 0]], 0)),
            heuristic(&state(&[&[0, 2], &[2, 0]], 0)),
            heuristic(&state(&[&[0, 0], &[2, 2]], 0))
        ];
        assert_eq!(down_leaves, [1020.0, 1016.0, 1016.0]);
        let down: f64 = down_leaves.iter().sum::<f64>() / 3.0;

        // Right leaves: [[2, 2], [0, 0]], [[0, 2], [2, 0]], [[0, 2], [0, 2]]
        let right_leaves = [
            heuristic(&state(&[&[2, 2], &[0, 0]], 0)),
            heuristic(&state(&[&[0, 2], &[2, 0]], 0)),
            heuristic(&state(&[&[0, 2], &[0, 2]], 0))
        ];
        assert_eq!(right_leaves, [1020.0, 1016.0, 1016.0]);
        let right: f64 = right_leaves.iter().sum::<f64>() / 3.0;

        let evaluation = ai.expectimax_heuristic().unwrap();
        assert_eq!(evaluation.best_move, Some(Move::Down));
        assert!(compare_f64(evaluation.value, down.max(right)));
        assert!(compare_f64(evaluation.value, 3052.0 / 3.0));
    }

    #[test]
    fn test_invalid_spawn_value_is_rejected(){
        for spawn_value in [0, 1, 3, 6]{
            let config = AiConfig { search_depth: 2, spawn_value };
            let mut ai = Ai::from_state_with_config(state(&[&[2, 0], &[0, 0]], 0), &config);

            assert_eq!(ai.compute_decision(), Err(AiError::InvalidSpawnValue(spawn_value)));
            assert!(ai.tree().is_none());
        }

        let config = AiConfig { search_depth: 2, spawn_value: 4 };
        let mut ai = Ai::from_state_with_config(state(&[&[2, 0], &[0, 0]], 0), &config);
        ai.build_tree().unwrap();
        let spawned = ai.tree().unwrap().node(NodeId::from_index(3)).unwrap().state();
        assert_eq!(spawned, &state(&[&[4, 0], &[2, 0]], 0));
    }

    #[test]
    fn test_accessors_and_simulator_handoff(){
        let config = AiConfig { search_depth: 1, ..AiConfig::DEFAULT };
        let root = state(&[&[2, 2], &[0, 0]], 0);
        let mut ai = Ai::with_config(root.clone(), Game2048::new(2), &config);

        assert_eq!(ai.root_state(), &root);
        assert_eq!(ai.config(), &config);
        assert_eq!(ai.compute_decision().unwrap(), Some(Move::Left));

        // the simulator was only used as scratch space for the expansion
        let mut simulator = ai.into_simulator();
        simulator.set_state(&root);
        assert_eq!(simulator.current_state(), root);
    }

    #[test]
    fn test_end_to_end_exact_depth_three(){
        // Left: [[4, 0], [0, 0]] score 4, every spawn keeps 4 after one more move
        // Down: [[0, 0], [2, 2]] score 0, every spawn can merge for 4
        // Right: mirror of Left
        let mut ai = ai(&[&[2, 2], &[0, 0]], 0, 3);

        assert_eq!(ai.compute_decision().unwrap(), Some(Move::Left));
        assert_eq!(ai.expectimax().unwrap().value, 4.0);
    }

    #[test]
    fn test_rebuild_replaces_tree(){
        let mut ai = ai(&[&[2, 0], &[0, 0]], 0, 2);
        ai.compute_decision().unwrap();
        ai.compute_decision().unwrap();
        assert_eq!(ai.tree().map(GameTree::len), Some(9));

        ai.set_root_state(state(&[&[2, 4], &[4, 2]], 0));
        assert!(ai.tree().is_none());
        assert_eq!(ai.compute_decision().unwrap(), None);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential(){
        let mut ai = ai(&[&[2, 4, 0, 0], &[0, 2, 0, 0], &[0, 0, 8, 0], &[2, 0, 0, 0]], 12, 3);
        let tree = ai.build_tree().unwrap();

        assert_eq!(tree.evaluate_par(&ScoreEvaluator), tree.evaluate(&ScoreEvaluator));
        assert_eq!(tree.evaluate_par(&HeuristicEvaluator), tree.evaluate(&HeuristicEvaluator));
    }
}
