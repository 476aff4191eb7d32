/// One mailbox: an address plus an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub address: String,
    pub name: Option<String>,
}

impl Address {
    pub fn new(address: &str, name: Option<&str>) -> Self {
        Address {
            address: address.to_string(),
            name: name.map(|n| n.to_string()),
        }
    }

    /// Render as `Name <address>` when a display name is set, else the bare address.
    pub fn render(&self) -> String {
        match &self.name {
            Some(name) => format!("{} <{}>", name, self.address),
            None => self.address.clone(),
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
