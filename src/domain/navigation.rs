/// Instruction to send the client to another path.
///
/// Returned in place of a value when an action finishes by navigating away.
/// It is not an error and must never be folded into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSignal {
  location: String,
}

impl NavigationSignal {
  pub fn redirect(location: impl Into<String>) -> Self {
    Self {
      location: location.into(),
    }
  }

  pub fn location(&self) -> &str {
    &self.location
  }
}

/// True for same-site relative paths such as `/dashboard/invoices`.
///
/// Rejects absolute URLs and protocol-relative `//host` forms.
pub fn is_local_path(path: &str) -> bool {
  path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
