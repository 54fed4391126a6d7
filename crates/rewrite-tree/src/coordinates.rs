// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Insertion points for template engines.
//!
//! A [`Coordinate`] names a node, a trivia location on it, and whether new
//! code goes before it, after it, or replaces it. Builders are obtained from
//! [`Tree::coordinates`]; node-specific points such as a call's argument
//! list are only offered by the variants that have one.

use std::fmt;

use rewrite_core::Id;
use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::tree::Tree;

/// Where new code goes relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Before,
    After,
    Replace,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Before => "BEFORE",
            Mode::After => "AFTER",
            Mode::Replace => "REPLACE",
        }
    }
}

/// One insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub tree: Id,
    pub location: Location,
    pub mode: Mode,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.mode.name(), self.location, self.tree)
    }
}

/// Coordinate builder for one node.
#[derive(Debug, Clone)]
pub struct Coordinates<'a> {
    tree: &'a Tree,
}

impl<'a> Coordinates<'a> {
    fn at(&self, location: Location, mode: Mode) -> Coordinate {
        Coordinate {
            tree: self.tree.id(),
            location,
            mode,
        }
    }

    pub fn before(&self) -> Coordinate {
        self.at(self.tree.prefix_location(), Mode::Before)
    }

    pub fn after(&self) -> Coordinate {
        self.at(self.tree.prefix_location(), Mode::After)
    }

    pub fn replace(&self) -> Coordinate {
        self.at(self.tree.prefix_location(), Mode::Replace)
    }

    /// The argument list of a call, instantiation or annotation.
    pub fn replace_arguments(&self) -> Option<Coordinate> {
        let location = match self.tree {
            Tree::MethodInvocation(_) => Location::MethodInvocationArguments,
            Tree::NewClass(_) => Location::NewClassArguments,
            Tree::Annotation(_) => Location::AnnotationArguments,
            _ => return None,
        };
        Some(self.at(location, Mode::Replace))
    }

    /// The parameter list of a method or lambda.
    pub fn replace_parameters(&self) -> Option<Coordinate> {
        let location = match self.tree {
            Tree::MethodDeclaration(_) => Location::MethodDeclarationParameters,
            Tree::Lambda(_) => Location::LambdaParameter,
            _ => return None,
        };
        Some(self.at(location, Mode::Replace))
    }

    /// Just before the closing trivia of a block.
    pub fn last_statement(&self) -> Option<Coordinate> {
        match self.tree {
            Tree::Block(_) => Some(self.at(Location::BlockEnd, Mode::Before)),
            _ => None,
        }
    }
}

impl Tree {
    pub fn coordinates(&self) -> Coordinates<'_> {
        Coordinates { tree: self }
    }
}
