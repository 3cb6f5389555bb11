//! LIFO stack and FIFO queue
//!
//! Views list elements bottom-to-top for the stack and front-to-rear for the
//! queue. Removing from an empty container records a single informational
//! frame and changes nothing.

use crate::errors::VizError;
use crate::frame::{FrameRecorder, FrameStream, Highlights, Mark, Role, Token, View};
use crate::vars;
use std::collections::VecDeque;

/// A framed stack or queue operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceOperation {
    /// Push (stack) or enqueue (queue)
    Add(Token),
    /// Pop (stack) or dequeue (queue)
    Remove,
}

impl SequenceOperation {
    /// Accepts `push`/`pop` and `enqueue`/`dequeue` (the two pairs are interchangeable)
    pub fn parse(name: &str, value: Option<Token>) -> Result<Self, VizError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "push" | "enqueue" => value.map(SequenceOperation::Add).ok_or(
                VizError::MissingParameter {
                    operation: "push/enqueue",
                    parameter: "a value (--value)",
                },
            ),
            "pop" | "dequeue" => Ok(SequenceOperation::Remove),
            _ => Err(VizError::UnsupportedSelector {
                kind: "stack/queue operation",
                name: name.to_string(),
                expected: "push, pop, enqueue, dequeue",
            }),
        }
    }
}

/// LIFO stack; the last element of the view is the top
#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<Token>,
}

impl Stack {
    pub fn new() -> Self {
        Stack::default()
    }

    pub fn from_tokens(values: impl IntoIterator<Item = Token>) -> Self {
        Stack {
            items: values.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.items.last()
    }

    pub fn push(&mut self, value: Token) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.items.pop()
    }

    pub fn view(&self) -> View {
        View::Sequence(self.items.clone())
    }

    fn top_mark(&self) -> Option<Mark> {
        self.items.len().checked_sub(1).map(Mark::at)
    }

    pub fn record_push(&mut self, value: Token, rec: &mut FrameRecorder) {
        rec.track(&["pushes"]);
        rec.record(
            self.view(),
            format!("Start: push {}", value),
            Highlights::new().with_opt(Role::Top, self.top_mark()),
            vars! { "value" => value, "size" => self.len() },
        );

        self.push(value.clone());
        rec.bump("pushes");
        let top = self.len() - 1;
        rec.record(
            self.view(),
            format!("Pushed {} on top", value),
            Highlights::new()
                .with(Role::Top, Mark::at(top))
                .with(Role::Inserted, Mark::at(top)),
            vars! { "top" => top, "size" => self.len() },
        );
        rec.record(
            self.view(),
            "Done.",
            Highlights::new().with(Role::Top, Mark::at(top)),
            vars! {},
        );
    }

    pub fn record_pop(&mut self, rec: &mut FrameRecorder) {
        rec.track(&["pops"]);
        let Some(top) = self.peek().cloned() else {
            rec.record(
                self.view(),
                "Stack empty; nothing to remove",
                Highlights::new(),
                vars! { "size" => 0 },
            );
            return;
        };

        let top_idx = self.len() - 1;
        rec.record(
            self.view(),
            "Start: pop",
            Highlights::new().with(Role::Top, Mark::at(top_idx)),
            vars! { "size" => self.len() },
        );
        rec.record(
            self.view(),
            format!("Peek top: {}", top),
            Highlights::new()
                .with(Role::Current, Mark::at(top_idx))
                .with(Role::Top, Mark::at(top_idx)),
            vars! { "top" => top },
        );

        self.pop();
        rec.bump("pops");
        rec.record(
            self.view(),
            format!("Popped {}", top),
            Highlights::new().with_opt(Role::Top, self.top_mark()),
            vars! { "removed" => top, "size" => self.len() },
        );
        rec.record(
            self.view(),
            "Done.",
            Highlights::new().with_opt(Role::Top, self.top_mark()),
            vars! {},
        );
    }

    pub fn record(&mut self, op: &SequenceOperation, rec: &mut FrameRecorder) {
        match op {
            SequenceOperation::Add(value) => self.record_push(value.clone(), rec),
            SequenceOperation::Remove => self.record_pop(rec),
        }
    }

    pub fn push_frames(&mut self, value: Token) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_push(value, &mut rec);
        rec.finish()
    }

    pub fn pop_frames(&mut self) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_pop(&mut rec);
        rec.finish()
    }
}

/// FIFO queue; the first element of the view is the front
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: VecDeque<Token>,
}

impl Queue {
    pub fn new() -> Self {
        Queue::default()
    }

    pub fn from_tokens(values: impl IntoIterator<Item = Token>) -> Self {
        Queue {
            items: values.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn front(&self) -> Option<&Token> {
        self.items.front()
    }

    pub fn enqueue(&mut self, value: Token) {
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self) -> Option<Token> {
        self.items.pop_front()
    }

    pub fn view(&self) -> View {
        View::Sequence(self.items.iter().cloned().collect())
    }

    fn ends(&self) -> Highlights {
        match self.items.len() {
            0 => Highlights::new(),
            n => Highlights::new()
                .with(Role::Front, Mark::at(0))
                .with(Role::Rear, Mark::at(n - 1)),
        }
    }

    pub fn record_enqueue(&mut self, value: Token, rec: &mut FrameRecorder) {
        rec.track(&["enqueues"]);
        rec.record(
            self.view(),
            format!("Start: enqueue {}", value),
            self.ends(),
            vars! { "value" => value, "size" => self.len() },
        );

        self.enqueue(value.clone());
        rec.bump("enqueues");
        let rear = self.len() - 1;
        rec.record(
            self.view(),
            format!("Enqueued {} at rear", value),
            self.ends().with(Role::Inserted, Mark::at(rear)),
            vars! { "rear" => rear, "size" => self.len() },
        );
        rec.record(self.view(), "Done.", self.ends(), vars! {});
    }

    pub fn record_dequeue(&mut self, rec: &mut FrameRecorder) {
        rec.track(&["dequeues"]);
        let Some(front) = self.front().cloned() else {
            rec.record(
                self.view(),
                "Queue empty; nothing to remove",
                Highlights::new(),
                vars! { "size" => 0 },
            );
            return;
        };

        rec.record(
            self.view(),
            "Start: dequeue",
            self.ends(),
            vars! { "size" => self.len() },
        );
        rec.record(
            self.view(),
            format!("Peek front: {}", front),
            self.ends().with(Role::Current, Mark::at(0)),
            vars! { "front" => front },
        );

        self.dequeue();
        rec.bump("dequeues");
        rec.record(
            self.view(),
            format!("Dequeued {}", front),
            self.ends(),
            vars! { "removed" => front, "size" => self.len() },
        );
        rec.record(self.view(), "Done.", self.ends(), vars! {});
    }

    pub fn record(&mut self, op: &SequenceOperation, rec: &mut FrameRecorder) {
        match op {
            SequenceOperation::Add(value) => self.record_enqueue(value.clone(), rec),
            SequenceOperation::Remove => self.record_dequeue(rec),
        }
    }

    pub fn enqueue_frames(&mut self, value: Token) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_enqueue(value, &mut rec);
        rec.finish()
    }

    pub fn dequeue_frames(&mut self) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_dequeue(&mut rec);
        rec.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    fn tokens(values: &[i64]) -> Vec<Token> {
        values.iter().copied().map(Token::Int).collect()
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Stack::from_tokens(tokens(&[1, 2]));
        stack.push(Token::Int(3));
        assert_eq!(stack.pop(), Some(Token::Int(3)));
        assert_eq!(stack.peek(), Some(&Token::Int(2)));
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = Queue::from_tokens(tokens(&[1, 2]));
        queue.enqueue(Token::Int(3));
        assert_eq!(queue.dequeue(), Some(Token::Int(1)));
        assert_eq!(queue.view(), View::Sequence(tokens(&[2, 3])));
    }

    #[test]
    fn test_pop_frames_shape() {
        let mut stack = Stack::from_tokens(tokens(&[4, 5]));
        let frames: Vec<Frame> = stack.pop_frames().collect();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[1].highlights().positions(Role::Current), &[1]);
        assert_eq!(frames[2].view(), &View::Sequence(tokens(&[4])));
        assert_eq!(frames[3].metric("pops"), 1);
    }

    #[test]
    fn test_empty_removal_is_single_frame() {
        let frames: Vec<Frame> = Stack::new().pop_frames().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].narration(), "Stack empty; nothing to remove");

        let frames: Vec<Frame> = Queue::new().dequeue_frames().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].metric("dequeues"), 0);
    }

    #[test]
    fn test_enqueue_marks_front_and_rear() {
        let mut queue = Queue::new();
        let frames: Vec<Frame> = queue.enqueue_frames(Token::from("a")).collect();
        let last = frames.last().unwrap();
        assert_eq!(last.highlights().positions(Role::Front), &[0]);
        assert_eq!(last.highlights().positions(Role::Rear), &[0]);
    }

    #[test]
    fn test_operation_aliases() {
        assert_eq!(
            SequenceOperation::parse("pop", None).unwrap(),
            SequenceOperation::Remove
        );
        assert_eq!(
            SequenceOperation::parse("enqueue", Some(Token::Int(1))).unwrap(),
            SequenceOperation::Add(Token::Int(1))
        );
        assert!(SequenceOperation::parse("push", None).is_err());
    }
}
