//! Server identifier generation

use uuid::Uuid;

/// Source of server ids for SIP008 entries.
///
/// Values must be unique with overwhelming probability. Any
/// `Fn() -> String` closure is a generator, which keeps tests deterministic.
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Random version-4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn generate_id(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_uuid_generator() {
        let a = UuidGenerator.generate_id();
        let b = UuidGenerator.generate_id();
        assert_eq!(a.len(), 36);
        assert_eq!(a.as_bytes()[14], b'4');
        assert_ne!(a, b);
    }

    #[test]
    fn test_closure_generator() {
        let counter = Cell::new(0);
        let ids = || {
            counter.set(counter.get() + 1);
            format!("server-{}", counter.get())
        };
        assert_eq!(ids.generate_id(), "server-1");
        assert_eq!(ids.generate_id(), "server-2");
    }
}
