//! # Rotation Transmission
//!
//! Mechanical power transfer between components, kept apart from the
//! physics engine. A producing component owns a *source* holding an
//! accumulated angular value; a consuming component owns a *sink* that
//! pulls from at most one source, scaled by the transmission ratio set
//! on the edge. Evaluation is pull-based and walks exactly one edge:
//! components that both consume and re-emit rotation (pulleys) copy
//! their sink value into their own source during update.
//!
//! All records live in one arena owned by the machine; components hold
//! [`SourceId`]/[`SinkId`] handles only.

use crate::component::ComponentId;
use crate::error::MachineError;

/// Handle to a rotation source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub(crate) usize);

/// Handle to a rotation sink record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(pub(crate) usize);

#[derive(Debug)]
struct SourceRecord {
    owner: ComponentId,
    rotation: f32,
    ratio: f32,
    sink: Option<SinkId>,
}

#[derive(Debug)]
struct SinkRecord {
    owner: ComponentId,
    source: Option<SourceId>,
}

/// Arena of every rotation source and sink in one machine.
#[derive(Debug, Default)]
pub struct RotationGraph {
    sources: Vec<SourceRecord>,
    sinks: Vec<SinkRecord>,
}

impl RotationGraph {
    pub fn add_source(&mut self, owner: ComponentId) -> SourceId {
        self.sources.push(SourceRecord {
            owner,
            rotation: 0.0,
            ratio: 1.0,
            sink: None,
        });
        SourceId(self.sources.len() - 1)
    }

    pub fn add_sink(&mut self, owner: ComponentId) -> SinkId {
        self.sinks.push(SinkRecord {
            owner,
            source: None,
        });
        SinkId(self.sinks.len() - 1)
    }

    /// Wire `source` to drive `sink` with the given ratio.
    ///
    /// The edge is symmetric: the source learns its sink and the sink
    /// learns its source. Any previous wiring on either endpoint is
    /// detached. Fails without modifying the graph if the new edge would
    /// close a loop.
    pub fn connect(
        &mut self,
        source: SourceId,
        sink: SinkId,
        ratio: f32,
    ) -> Result<(), MachineError> {
        if self.would_cycle(source, sink) {
            return Err(MachineError::RotationCycle {
                source: self.sources[source.0].owner,
                sink: self.sinks[sink.0].owner,
            });
        }
        if let Some(old) = self.sinks[sink.0].source.take() {
            self.sources[old.0].sink = None;
        }
        if let Some(old) = self.sources[source.0].sink.take() {
            self.sinks[old.0].source = None;
        }
        self.sources[source.0].sink = Some(sink);
        self.sources[source.0].ratio = ratio;
        self.sinks[sink.0].source = Some(source);
        Ok(())
    }

    pub fn set_rotation(&mut self, source: SourceId, rotation: f32) {
        self.sources[source.0].rotation = rotation;
    }

    pub fn rotation(&self, source: SourceId) -> f32 {
        self.sources[source.0].rotation
    }

    pub fn ratio(&self, source: SourceId) -> f32 {
        self.sources[source.0].ratio
    }

    /// Pull the rotation delivered to `sink`: the upstream source value
    /// times the edge ratio, or 0 when unconnected.
    pub fn sink_rotation(&self, sink: SinkId) -> f32 {
        match self.sinks[sink.0].source {
            Some(source) => {
                let record = &self.sources[source.0];
                record.rotation * record.ratio
            }
            None => 0.0,
        }
    }

    /// Zero every rotation value, preserving topology and handles.
    pub fn reset(&mut self) {
        for source in &mut self.sources {
            source.rotation = 0.0;
        }
    }

    /// Source values in allocation order, for state snapshots.
    pub fn rotations(&self) -> Vec<f32> {
        self.sources.iter().map(|source| source.rotation).collect()
    }

    fn source_owned_by(&self, owner: ComponentId) -> Option<SourceId> {
        self.sources
            .iter()
            .position(|source| source.owner == owner)
            .map(SourceId)
    }

    /// Walk downstream from `sink`, owner by owner, checking whether the
    /// chain comes back around to `source`.
    fn would_cycle(&self, source: SourceId, sink: SinkId) -> bool {
        let mut current = sink;
        for _ in 0..=self.sources.len() {
            let Some(forward) = self.source_owned_by(self.sinks[current.0].owner) else {
                return false;
            };
            if forward == source {
                return true;
            }
            match self.sources[forward.0].sink {
                Some(next) => current = next,
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconnected_sink_reads_zero() {
        let mut graph = RotationGraph::default();
        let sink = graph.add_sink(ComponentId(0));
        assert_eq!(graph.sink_rotation(sink), 0.0);
    }

    #[test]
    fn connected_sink_applies_ratio() {
        let mut graph = RotationGraph::default();
        let source = graph.add_source(ComponentId(0));
        let sink = graph.add_sink(ComponentId(1));
        graph.connect(source, sink, 2.5).unwrap();
        graph.set_rotation(source, 1.2);
        assert!((graph.sink_rotation(sink) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn reconnect_detaches_previous_edge() {
        let mut graph = RotationGraph::default();
        let first = graph.add_source(ComponentId(0));
        let second = graph.add_source(ComponentId(1));
        let sink = graph.add_sink(ComponentId(2));
        graph.connect(first, sink, 1.0).unwrap();
        graph.connect(second, sink, 1.0).unwrap();
        graph.set_rotation(first, 5.0);
        graph.set_rotation(second, 7.0);
        assert!((graph.sink_rotation(sink) - 7.0).abs() < 1e-6);
        // the stolen source no longer drives anything, so re-wiring it
        // elsewhere must not disturb the sink
        let other_sink = graph.add_sink(ComponentId(3));
        graph.connect(first, other_sink, 1.0).unwrap();
        assert!((graph.sink_rotation(sink) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut graph = RotationGraph::default();
        let source = graph.add_source(ComponentId(0));
        let sink = graph.add_sink(ComponentId(0));
        let result = graph.connect(source, sink, 1.0);
        assert_eq!(
            result,
            Err(MachineError::RotationCycle {
                source: ComponentId(0),
                sink: ComponentId(0),
            })
        );
        assert_eq!(graph.sink_rotation(sink), 0.0);
    }

    #[test]
    fn two_stage_loop_is_rejected() {
        let mut graph = RotationGraph::default();
        let a_source = graph.add_source(ComponentId(0));
        let a_sink = graph.add_sink(ComponentId(0));
        let b_source = graph.add_source(ComponentId(1));
        let b_sink = graph.add_sink(ComponentId(1));
        graph.connect(a_source, b_sink, 1.0).unwrap();
        assert!(graph.connect(b_source, a_sink, 1.0).is_err());
        // the failed connect must leave the first edge intact
        graph.set_rotation(a_source, 2.0);
        assert!((graph.sink_rotation(b_sink) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn reset_zeroes_values_but_keeps_edges() {
        let mut graph = RotationGraph::default();
        let source = graph.add_source(ComponentId(0));
        let sink = graph.add_sink(ComponentId(1));
        graph.connect(source, sink, 3.0).unwrap();
        graph.set_rotation(source, 4.0);
        graph.reset();
        assert_eq!(graph.rotation(source), 0.0);
        graph.set_rotation(source, 1.0);
        assert!((graph.sink_rotation(sink) - 3.0).abs() < 1e-6);
    }
}
