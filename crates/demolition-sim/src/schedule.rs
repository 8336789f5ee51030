//! Deferred tasks keyed by tick deadline.
//!
//! Fuses, cascade damage and row wake-ups are scheduled relative to the
//! tick clock and drained once per tick. Tasks with the same deadline run
//! in scheduling order. A task never checks whether its target still
//! exists; the handler does, so a stale task is simply a no-op.

use std::collections::BTreeMap;

use hecs::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Projectile fuse under the detonate policy.
    Detonate { projectile: Entity },
    /// Projectile fuse under the expire policy.
    Expire { projectile: Entity },
    /// One point of blast damage to a block caught in an explosion.
    CascadeDamage { target: Entity },
    /// Switch a structure row from static to dynamic.
    WakeRow { members: Vec<Entity> },
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: BTreeMap<(u64, u64), Task>,
    next_seq: u64,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_tick: u64, task: Task) {
        self.pending.insert((due_tick, self.next_seq), task);
        self.next_seq += 1;
    }

    /// Remove and return the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Task> {
        let (&(due, _), _) = self.pending.first_key_value()?;
        if due > now {
            return None;
        }
        self.pending.pop_first().map(|(_, task)| task)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    #[test]
    fn due_tasks_pop_in_deadline_then_insertion_order() {
        let mut world = World::new();
        let a = world.spawn((1u8,));
        let b = world.spawn((2u8,));
        let c = world.spawn((3u8,));

        let mut queue = TaskQueue::new();
        queue.schedule(10, Task::CascadeDamage { target: a });
        queue.schedule(5, Task::CascadeDamage { target: b });
        queue.schedule(10, Task::CascadeDamage { target: c });

        assert_eq!(queue.pop_due(4), None);
        assert_eq!(queue.pop_due(9), Some(Task::CascadeDamage { target: b }));
        assert_eq!(queue.pop_due(9), None);
        assert_eq!(queue.pop_due(10), Some(Task::CascadeDamage { target: a }));
        assert_eq!(queue.pop_due(10), Some(Task::CascadeDamage { target: c }));
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut world = World::new();
        let a = world.spawn((1u8,));
        let mut queue = TaskQueue::new();
        queue.schedule(1, Task::Detonate { projectile: a });
        queue.schedule(2, Task::WakeRow { members: vec![a] });
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert_eq!(queue.pop_due(u64::MAX), None);
    }
}
