//! In-memory `PeopleSource` for store and facade tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::CoreError;
use crate::model::{Address, Company, Person, PersonId};
use crate::source::PeopleSource;

pub fn person(id: u64, name: &str) -> Person {
    Person {
        id: PersonId::Numeric(id),
        name: name.to_owned(),
        username: name.split_whitespace().next().unwrap_or(name).to_lowercase(),
        email: format!("{}@example.com", name.replace(' ', ".").to_lowercase()),
        phone: String::new(),
        website: String::new(),
        address: Address::default(),
        company: Company::default(),
    }
}

/// The ten JSONPlaceholder names, in server order.
pub fn sample_people() -> Vec<Person> {
    [
        "Leanne Graham",
        "Ervin Howell",
        "Clementine Bauch",
        "Patricia Lebsack",
        "Chelsey Dietrich",
        "Mrs. Dennis Schulist",
        "Kurtis Weissnat",
        "Nicholas Runolfsdottir V",
        "Glenna Reichert",
        "Clementina DuBuque",
    ]
    .iter()
    .zip(1u64..)
    .map(|(name, id)| person(id, name))
    .collect()
}

// ===== MockSource =====

pub struct MockSource {
    people: Vec<Person>,
    fail_list: bool,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    gates: Mutex<HashMap<PersonId, oneshot::Receiver<()>>>,
    aliases: HashMap<PersonId, PersonId>,
}

impl MockSource {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people,
            fail_list: false,
            list_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            gates: Mutex::new(HashMap::new()),
            aliases: HashMap::new(),
        }
    }

    /// A source whose list endpoint always errors.
    pub fn failing() -> Self {
        Self {
            fail_list: true,
            ..Self::new(Vec::new())
        }
    }

    /// Hold the next `get_person(id)` until the returned sender fires.
    pub fn gate(&self, id: impl Into<PersonId>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(id.into(), rx);
        tx
    }

    /// Answer `get_person(alias)` with the record stored under `id`, the
    /// way a server normalizes "007" to 7.
    pub fn with_alias(mut self, alias: impl Into<PersonId>, id: impl Into<PersonId>) -> Self {
        self.aliases.insert(alias.into(), id.into());
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PeopleSource for MockSource {
    async fn list_people(&self) -> Result<Vec<Person>, CoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(CoreError::ConnectionFailed {
                url: "mock://directory".into(),
                reason: "connection refused".into(),
            });
        }
        Ok(self.people.clone())
    }

    async fn get_person(&self, id: &PersonId) -> Result<Person, CoreError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().remove(id);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        let id = self.aliases.get(id).unwrap_or(id);
        self.people
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::PersonNotFound {
                identifier: id.to_string(),
            })
    }
}
