use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchOrigin {
    Local,
    Remote,
}

impl fmt::Display for BranchOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchOrigin::Local => write!(f, "local"),
            BranchOrigin::Remote => write!(f, "remote"),
        }
    }
}

/// One deletable branch as resolved by the inventory.
///
/// A name present both locally and on the remote is a single record with
/// `origin = Local` and `on_remote = true`. Remote deletion of such a branch is
/// requested explicitly through [`BranchRecord::as_remote`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchRecord {
    pub name: String,
    pub origin: BranchOrigin,
    pub is_current: bool,
    pub on_remote: bool,
    pub remote: String,
}

impl BranchRecord {
    pub fn local(name: impl Into<String>, remote: impl Into<String>, is_current: bool) -> Self {
        Self {
            name: name.into(),
            origin: BranchOrigin::Local,
            is_current,
            on_remote: false,
            remote: remote.into(),
        }
    }

    pub fn remote(name: impl Into<String>, remote: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: BranchOrigin::Remote,
            is_current: false,
            on_remote: true,
            remote: remote.into(),
        }
    }

    pub fn with_remote_counterpart(mut self, on_remote: bool) -> Self {
        self.on_remote = on_remote;
        self
    }

    pub fn is_local(&self) -> bool {
        self.origin == BranchOrigin::Local
    }

    /// `<remote>/<name>`, derived rather than looked up.
    pub fn remote_ref(&self) -> String {
        format!("{}/{}", self.remote, self.name)
    }

    /// Reference whose tip commit describes this record.
    pub fn commit_ref(&self) -> String {
        match self.origin {
            BranchOrigin::Local => self.name.clone(),
            BranchOrigin::Remote => self.remote_ref(),
        }
    }

    /// What a delete of this record removes: the local branch or the remote ref.
    pub fn deletion_target(&self) -> String {
        self.commit_ref()
    }

    /// The remote-deletion request for the same name.
    pub fn as_remote(&self) -> Self {
        Self::remote(self.name.clone(), self.remote.clone())
    }
}

impl fmt::Display for BranchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.deletion_target(), self.origin)
    }
}
