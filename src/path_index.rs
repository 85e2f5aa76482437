use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{branch::Branch, print_helpers::write_with_separator};

/// A path from the top-level math list down to a particular atom.
///
/// Each node stores the position of an atom within its enclosing list. If the
/// path descends further, the node also stores which branch of that atom
/// (superscript, numerator, ...) the rest of the path lives in. A node
/// without a sub-index is the terminal node of the path.
///
/// For example, in the formula 25^{2/4} the character 4 sits at
/// `(1, superscript):(0, denominator):(0)`: start at position 1 (the 5),
/// go into its superscript, look at position 0 there (the fraction 2/4),
/// go into its denominator, and take position 0.
///
/// Paths are immutable. Every operation that "changes" a path builds a new
/// one, so distinct paths never affect each other.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct PathIndex {
    atom_position: usize,
    sub_index: Option<(Branch, Box<PathIndex>)>,
}

impl PathIndex {
    /// A path pointing at the atom at `position` in the top-level list.
    pub fn level0(position: usize) -> Self {
        Self {
            atom_position: position,
            sub_index: None,
        }
    }

    /// A path pointing at `position`, continuing into the given branch of
    /// that atom.
    pub fn at(position: usize, branch: Branch, sub_index: PathIndex) -> Self {
        Self {
            atom_position: position,
            sub_index: Some((branch, Box::new(sub_index))),
        }
    }

    /// The position of the atom this node points at, within its enclosing list.
    pub fn atom_position(&self) -> usize {
        self.atom_position
    }

    /// The branch the path descends into at this node.
    /// `None` at the terminal node.
    pub fn branch(&self) -> Option<Branch> {
        self.sub_index.as_ref().map(|(branch, _)| *branch)
    }

    /// The rest of the path below this node, if it descends further.
    pub fn sub_index(&self) -> Option<&PathIndex> {
        self.sub_index.as_ref().map(|(_, child)| child.as_ref())
    }

    /// The number of nodes on the path. A path into the top-level list has
    /// level 1.
    pub fn level(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the nodes of the path, outermost first.
    pub fn iter(&self) -> PathNodes<'_> {
        PathNodes { next: Some(self) }
    }

    /// Moves one atom to the left within the innermost list.
    /// `None` if the path already points at position 0 there.
    pub fn previous(&self) -> Option<PathIndex> {
        match &self.sub_index {
            None => {
                if self.atom_position == 0 {
                    None
                } else {
                    Some(Self::level0(self.atom_position - 1))
                }
            }
            Some((branch, child)) => child
                .previous()
                .map(|previous| Self::at(self.atom_position, *branch, previous)),
        }
    }

    /// Moves one atom to the right within the innermost list.
    /// No upper bound is enforced here, the consumer has to reject positions
    /// past the end of the list it knows about.
    pub fn next(&self) -> PathIndex {
        match &self.sub_index {
            None => Self::level0(self.atom_position + 1),
            Some((branch, child)) => Self::at(self.atom_position, *branch, child.next()),
        }
    }

    /// True if the innermost node points at the beginning of its list.
    /// Note that a formula has multiple lines, e.g. a superscript or a
    /// numerator is a line of its own, so this can be true for a deeply
    /// nested path.
    pub fn is_at_beginning_of_line(&self) -> bool {
        self.final_node().atom_position == 0
    }

    /// The branch the innermost atom is nested inside, i.e. the branch of
    /// the node whose child is the terminal node. `None` for a level-0 path.
    pub fn final_branch_type(&self) -> Option<Branch> {
        match &self.sub_index {
            None => None,
            Some((branch, child)) => {
                if child.sub_index.is_some() {
                    child.final_branch_type()
                } else {
                    Some(*branch)
                }
            }
        }
    }

    /// True if the path descends into a branch of the given type anywhere.
    pub fn has_branch_of_type(&self, branch: Branch) -> bool {
        self.iter().any(|node| node.branch() == Some(branch))
    }

    /// Extends the path at its innermost node: the terminal node now
    /// descends into `branch` of its atom, continuing with `sub_index`.
    pub fn level_up(&self, branch: Branch, sub_index: PathIndex) -> PathIndex {
        match &self.sub_index {
            None => Self::at(self.atom_position, branch, sub_index),
            Some((own_branch, child)) => Self::at(
                self.atom_position,
                *own_branch,
                child.level_up(branch, sub_index),
            ),
        }
    }

    /// Removes the innermost node, making its parent the new terminal node.
    /// `None` if the path is already at level 0.
    pub fn level_down(&self) -> Option<PathIndex> {
        let (branch, child) = self.sub_index.as_ref()?;
        match child.level_down() {
            Some(child) => Some(Self::at(self.atom_position, *branch, child)),
            None => Some(Self::level0(self.atom_position)),
        }
    }

    fn final_node(&self) -> &PathIndex {
        let mut current = self;
        while let Some((_, child)) = &current.sub_index {
            current = child;
        }
        current
    }

    /// The atom position of the terminal node.
    pub(crate) fn final_position(&self) -> usize {
        self.final_node().atom_position
    }

    /// The same path with the terminal node's atom position replaced.
    pub(crate) fn with_final_position(&self, position: usize) -> PathIndex {
        match &self.sub_index {
            None => Self::level0(position),
            Some((branch, child)) => Self::at(
                self.atom_position,
                *branch,
                child.with_final_position(position),
            ),
        }
    }
}

pub struct PathNodes<'a> {
    next: Option<&'a PathIndex>,
}

impl<'a> Iterator for PathNodes<'a> {
    type Item = &'a PathIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.sub_index();
        Some(current)
    }
}

impl fmt::Display for PathIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_with_separator(self.iter().map(DisplayNode), ":", f)
    }
}

/// Displays a single node, without the rest of the path below it.
struct DisplayNode<'a>(&'a PathIndex);

impl fmt::Display for DisplayNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.branch() {
            Some(branch) => write!(f, "({}, {})", self.0.atom_position(), branch),
            None => write!(f, "({})", self.0.atom_position()),
        }
    }
}
