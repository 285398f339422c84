//! Name-based lookups.
//!
//! Contexts refer to clusters and users by name only. Nothing checks that
//! those names exist, so every lookup returns `Option` and a dangling name is
//! simply `None`. With duplicate names the first entry wins.

use super::model::{Cluster, Context, KubeConfig, User};

/// A context with both of its references followed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub context_name: &'a str,
    pub context: &'a Context,
    pub cluster: &'a Cluster,
    pub user: &'a User,
}

impl KubeConfig {
    /// The first cluster named `name`, or `None`.
    pub fn cluster(&self, name: &str) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.cluster)
    }

    /// Mutable [`KubeConfig::cluster`].
    pub fn cluster_mut(&mut self, name: &str) -> Option<&mut Cluster> {
        self.clusters
            .iter_mut()
            .find(|c| c.name == name)
            .map(|c| &mut c.cluster)
    }

    /// The first context named `name`, or `None`.
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.context)
    }

    /// Mutable [`KubeConfig::context`].
    pub fn context_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts
            .iter_mut()
            .find(|c| c.name == name)
            .map(|c| &mut c.context)
    }

    /// The first user named `name`, or `None`.
    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name).map(|u| &u.user)
    }

    /// Mutable [`KubeConfig::user`].
    pub fn user_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.name == name)
            .map(|u| &mut u.user)
    }

    /// The context named by `current-context`, if set and present.
    pub fn current(&self) -> Option<&Context> {
        if self.current_context.is_empty() {
            return None;
        }
        self.context(&self.current_context)
    }

    /// Follow the context `name` to its cluster and user.
    ///
    /// `None` if the context, its cluster, or its user cannot be found.
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<Resolved<'a>> {
        let context = self.context(name)?;
        Some(Resolved {
            context_name: name,
            context,
            cluster: self.cluster(&context.cluster)?,
            user: self.user(&context.user)?,
        })
    }

    /// [`KubeConfig::resolve`] for the current context.
    pub fn resolve_current(&self) -> Option<Resolved<'_>> {
        if self.current_context.is_empty() {
            return None;
        }
        self.resolve(&self.current_context)
    }

    /// True when there is nothing to write: no entries, no current context,
    /// no unknown keys.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
            && self.contexts.is_empty()
            && self.users.is_empty()
            && self.current_context.is_empty()
            && self.extra.is_empty()
    }
}
