/// Blends volume and difficulty into one 0–100 attractiveness score.
///
/// `volume_score` saturates at 100, so the raw blend can reach 150 when
/// difficulty is near zero; the final clamp keeps the reported value in
/// range.
pub fn opportunity_score(search_volume: u32, difficulty: u8) -> u8 {
    let volume_score = ((search_volume as f64 / 1_000.0) * 10.0).min(100.0);
    let raw = volume_score - difficulty as f64 + 50.0;
    raw.floor().clamp(0.0, 100.0) as u8
}
