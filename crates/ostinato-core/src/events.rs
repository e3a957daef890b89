//! Lock-free control-event channel.
//!
//! Carries [`LooperEvent`]s from a UI or button-polling thread into the audio
//! context. The audio side drains the queue at block boundaries and feeds the
//! mode controller; pushes never block and never allocate.

use crate::fsm::LooperEvent;
use ringbuf::{traits::*, HeapCons, HeapProd, HeapRb};

const DEFAULT_CAPACITY: usize = 64;

/// Producer side -- push events from the control thread.
pub struct ControlProducer {
    producer: HeapProd<LooperEvent>,
}

impl ControlProducer {
    /// Returns `false` if the ring buffer is full and the event was dropped.
    #[inline]
    pub fn push(&mut self, event: LooperEvent) -> bool {
        self.producer.try_push(event).is_ok()
    }
}

/// Consumer side -- drain events in the audio context.
pub struct ControlConsumer {
    consumer: HeapCons<LooperEvent>,
}

impl ControlConsumer {
    #[inline]
    pub fn pop(&mut self) -> Option<LooperEvent> {
        self.consumer.try_pop()
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.consumer.is_empty()
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.consumer.occupied_len()
    }
}

pub fn control_channel() -> (ControlProducer, ControlConsumer) {
    control_channel_with_capacity(DEFAULT_CAPACITY)
}

pub fn control_channel_with_capacity(capacity: usize) -> (ControlProducer, ControlConsumer) {
    let rb = HeapRb::new(capacity);
    let (producer, consumer) = rb.split();
    (
        ControlProducer { producer },
        ControlConsumer { consumer },
    )
}
