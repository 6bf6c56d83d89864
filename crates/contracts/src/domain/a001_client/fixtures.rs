use once_cell::sync::Lazy;

use super::aggregate::{Client, ClientStatus};

static CLIENTS: Lazy<Vec<Client>> = Lazy::new(|| {
    vec![
        Client::new(
            "Juan Domínguez",
            "JD",
            "juan@techstore.com",
            "+52 55 1234 5678",
            3,
            ClientStatus::Active,
        ),
        Client::new(
            "María González",
            "MG",
            "maria@inventarios.mx",
            "+52 55 8765 4321",
            2,
            ClientStatus::Active,
        ),
        Client::new(
            "Roberto Sánchez",
            "RS",
            "roberto@saborcasero.mx",
            "+52 33 2468 1357",
            1,
            ClientStatus::Inactive,
        ),
        Client::new(
            "Laura Fernández",
            "LF",
            "laura@reservafacil.com",
            "+52 81 9753 1864",
            2,
            ClientStatus::Active,
        ),
    ]
});

/// Demo clients listed in the clients section.
pub fn demo_clients() -> &'static [Client] {
    &CLIENTS
}
