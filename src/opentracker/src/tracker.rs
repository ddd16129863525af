use opentracker_algos::WorkoutSummary;
use opentracker_codec::{SensorPacket, TrackerError, WorkoutRecord};

/// The sample burst a tracker emits during a demo session.
pub fn demo_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Decode and summarize packets in input order, one report line per packet.
/// The first packet that fails to decode or compute aborts the batch.
pub fn summarize(packets: &[SensorPacket]) -> Result<Vec<String>, TrackerError> {
    let mut lines = Vec::with_capacity(packets.len());
    for packet in packets {
        debug!("decoding {} packet", packet.workout_type);
        let record = WorkoutRecord::from_packet(packet)?;
        let summary = WorkoutSummary::new(&record)?;
        lines.push(summary.to_string());
    }
    Ok(lines)
}
