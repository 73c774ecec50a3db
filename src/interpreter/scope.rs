use std::{
    collections::{HashMap, HashSet},
    ops::{Deref, DerefMut},
};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Names bound as constants in every freshly created global scope.
pub const GLOBAL_CONSTANTS: [&str; 3] = ["null", "true", "false"];

/// One level of the scope chain.
#[derive(Debug, Default)]
struct Frame {
    bindings:  HashMap<String, Value>,
    constants: HashSet<String>,
    parent:    Option<usize>,
}

/// A chain of variable frames.
///
/// Frames live in an arena and refer to their parent by index. The innermost
/// frame is the one new declarations go into; lookups walk outward from it.
/// Child frames are created with [`Scope::push_frame`] and discarded with
/// [`Scope::pop_frame`], so a child can never outlive its parent.
///
/// All accessors hand out clones, never references into the frame, so a value
/// read from a binding is independent of the stored one.
#[derive(Debug)]
pub struct Scope {
    frames:  Vec<Frame>,
    current: usize,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Creates a scope with a single, empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames:  vec![Frame::default()],
               current: 0, }
    }

    /// Creates a root scope with `null`, `true` and `false` pre-declared as
    /// constants.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{scope::Scope, value::core::Value};
    ///
    /// let scope = Scope::global();
    ///
    /// assert_eq!(scope.get("true", 1).unwrap(), Value::Bool(true));
    /// assert!(scope.is_constant("null"));
    /// ```
    #[must_use]
    pub fn global() -> Self {
        let mut scope = Self::new();
        let frame = &mut scope.frames[0];
        for (name, value) in GLOBAL_CONSTANTS.into_iter()
                                             .zip([Value::Null, Value::Bool(true), Value::Bool(false)])
        {
            frame.bindings.insert(name.to_string(), value);
            frame.constants.insert(name.to_string());
        }
        scope
    }

    /// Number of frames between the innermost frame and the root, inclusive.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut frame = &self.frames[self.current];
        while let Some(parent) = frame.parent {
            depth += 1;
            frame = &self.frames[parent];
        }
        depth
    }

    /// Opens a new innermost frame whose parent is the current one.
    pub fn push_frame(&mut self) {
        self.frames.push(Frame { parent: Some(self.current),
                                 ..Frame::default() });
        self.current = self.frames.len() - 1;
        tracing::trace!(depth = self.depth(), "pushed frame");
    }

    /// Discards the innermost frame and all of its bindings.
    ///
    /// Returns `false` without doing anything when only the root frame is
    /// left.
    pub fn pop_frame(&mut self) -> bool {
        let Some(parent) = self.frames[self.current].parent else {
            return false;
        };
        self.frames.truncate(self.current);
        self.current = parent;
        tracing::trace!(depth = self.depth(), "popped frame");
        true
    }

    /// Opens a child frame that is popped again when the guard is dropped.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{scope::Scope, value::core::Value};
    ///
    /// let mut scope = Scope::global();
    /// scope.declare("x", Value::Number(1.0), false, 1).unwrap();
    ///
    /// {
    ///     let mut inner = scope.scoped();
    ///     inner.declare("x", Value::Number(2.0), false, 1).unwrap();
    ///     assert_eq!(inner.get("x", 1).unwrap(), Value::Number(2.0));
    /// }
    ///
    /// assert_eq!(scope.get("x", 1).unwrap(), Value::Number(1.0));
    /// ```
    pub fn scoped(&mut self) -> FrameGuard<'_> {
        self.push_frame();
        FrameGuard { scope: self }
    }

    /// Finds the index of the nearest frame that binds `name`.
    fn resolve(&self, name: &str) -> Option<usize> {
        let mut index = self.current;
        loop {
            let frame = &self.frames[index];
            if frame.bindings.contains_key(name) {
                return Some(index);
            }
            index = frame.parent?;
        }
    }

    /// Binds `name` in the innermost frame and returns a copy of the value.
    ///
    /// Shadowing a binding of an outer frame is allowed.
    ///
    /// # Errors
    /// `RuntimeError::VariableRedeclaration` if the innermost frame already
    /// binds `name`.
    pub fn declare(&mut self,
                   name: &str,
                   value: Value,
                   is_const: bool,
                   line: usize)
                   -> EvalResult<Value> {
        let frame = &mut self.frames[self.current];
        if frame.bindings.contains_key(name) {
            return Err(RuntimeError::VariableRedeclaration { name: name.to_string(),
                                                             line });
        }

        tracing::debug!(name, is_const, "declared variable");
        frame.bindings.insert(name.to_string(), value.clone());
        if is_const {
            frame.constants.insert(name.to_string());
        }
        Ok(value)
    }

    /// Looks `name` up through the chain and returns a copy of its value.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if no frame binds `name`.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.resolve(name)
            .and_then(|index| self.frames[index].bindings.get(name))
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Replaces the value of the nearest binding of `name` and returns a copy
    /// of the new value.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if no frame binds `name`.
    /// - `RuntimeError::ConstantReassignment` if the resolved binding is a
    ///   constant.
    pub fn set(&mut self, name: &str, value: Value, line: usize) -> EvalResult<Value> {
        let index = self.resolve(name)
                        .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                       line })?;
        let frame = &mut self.frames[index];
        if frame.constants.contains(name) {
            return Err(RuntimeError::ConstantReassignment { name: name.to_string(),
                                                            line });
        }

        frame.bindings.insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Returns `true` if the nearest binding of `name` is a constant.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.resolve(name)
            .is_some_and(|index| self.frames[index].constants.contains(name))
    }
}

/// A child frame that lives as long as the guard.
///
/// Dereferences to the [`Scope`] it was opened on; dropping the guard pops the
/// frame, also when evaluation inside it fails.
pub struct FrameGuard<'a> {
    scope: &'a mut Scope,
}

impl Deref for FrameGuard<'_> {
    type Target = Scope;

    fn deref(&self) -> &Scope {
        self.scope
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Scope {
        self.scope
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.scope.pop_frame();
    }
}
