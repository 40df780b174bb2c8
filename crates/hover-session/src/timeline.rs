//! Deferred work for the event loop.
//!
//! Every delayed effect (animation steps, scroll restore, focus nudges,
//! clipboard polling) is a [`ScheduledTask`] with a due instant. The app
//! sleeps until [`Timeline::next_deadline`] and then runs whatever
//! [`Timeline::pop_due`] hands back.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use hover_common::WindowId;
use hover_platform::PastedFile;

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduledTask {
    AnimationStep { window: WindowId, generation: u64 },
    RestoreScroll { window: WindowId, offset: f64 },
    CenterWindow { window: WindowId },
    FocusView { window: WindowId },
    ForceToFront { window: WindowId },
    RevertAlwaysOnTop { window: WindowId },
    EndCaptureOverride,
    PollClipboard { attempt: u32 },
    PasteImage { window: WindowId, png: Vec<u8> },
    PasteFile { window: WindowId, file: PastedFile },
    /// Retry a file that arrived before any content was ready.
    OpenPendingFile,
}

impl ScheduledTask {
    /// Window the task acts on, if any.
    pub fn window(&self) -> Option<WindowId> {
        match self {
            ScheduledTask::AnimationStep { window, .. }
            | ScheduledTask::RestoreScroll { window, .. }
            | ScheduledTask::CenterWindow { window }
            | ScheduledTask::FocusView { window }
            | ScheduledTask::ForceToFront { window }
            | ScheduledTask::RevertAlwaysOnTop { window }
            | ScheduledTask::PasteImage { window, .. }
            | ScheduledTask::PasteFile { window, .. } => Some(*window),
            ScheduledTask::EndCaptureOverride
            | ScheduledTask::PollClipboard { .. }
            | ScheduledTask::OpenPendingFile => None,
        }
    }
}

#[derive(Debug)]
struct Entry {
    due: Instant,
    seq: u64,
    task: ScheduledTask,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Tasks ordered by due time, then by scheduling order.
#[derive(Debug, Default)]
pub struct Timeline {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, task: ScheduledTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { due, seq, task }));
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<ScheduledTask> {
        let mut due = Vec::new();
        while let Some(Reverse(entry)) = self.heap.peek() {
            if entry.due > now {
                break;
            }
            if let Some(Reverse(entry)) = self.heap.pop() {
                due.push(entry.task);
            }
        }
        due
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.heap.peek().map(|Reverse(e)| e.due)
    }

    /// Forget every task bound to `window`.
    pub fn drop_window(&mut self, window: WindowId) {
        self.heap.retain(|Reverse(e)| e.task.window() != Some(window));
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
