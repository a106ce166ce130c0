use super::*;
use crate::{config::PromoConfig, eval::Evaluator};

fn promo() -> Promo {
    Promo::new(&PromoConfig::default()).unwrap()
}

#[test]
fn sink_config_describes_the_promo() {
    let cfg = SinkConfig::for_promo(&promo());
    assert_eq!((cfg.width, cfg.height), (1920, 1080));
    assert_eq!(cfg.total_frames, 525);
    assert_eq!(cfg.font.family, "Inter");
    assert_eq!(cfg.audio.map(|a| a.cues().len()), Some(4));
}

#[test]
fn in_memory_sink_enforces_order() {
    let p = promo();
    let f0 = Evaluator::eval_frame(&p, FrameIndex(0)).unwrap();
    let f1 = Evaluator::eval_frame(&p, FrameIndex(1)).unwrap();

    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig::for_promo(&p)).unwrap();
    sink.push_frame(&f0).unwrap();
    sink.push_frame(&f1).unwrap();
    assert!(sink.push_frame(&f1).is_err());
    assert!(sink.push_frame(&f0).is_err());
    sink.end().unwrap();

    assert!(sink.is_ended());
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.config().map(|c| c.total_frames), Some(525));
}

#[test]
fn begin_resets_in_memory_sink() {
    let p = promo();
    let f0 = Evaluator::eval_frame(&p, FrameIndex(0)).unwrap();
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig::for_promo(&p)).unwrap();
    sink.push_frame(&f0).unwrap();
    sink.begin(SinkConfig::for_promo(&p)).unwrap();
    assert!(sink.frames().is_empty());
    sink.push_frame(&f0).unwrap();
}

#[test]
fn json_lines_writes_header_then_frames() {
    let p = promo();
    let mut sink = JsonLinesSink::new(Vec::<u8>::new());
    sink.begin(SinkConfig::for_promo(&p)).unwrap();
    for i in 0..3 {
        sink.push_frame(&Evaluator::eval_frame(&p, FrameIndex(i)).unwrap())
            .unwrap();
    }
    sink.end().unwrap();
    assert_eq!(sink.frames_written(), 3);

    let bytes = sink.into_inner();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["width"], 1920);
    assert_eq!(lines[0]["total_frames"], 525);
    assert_eq!(lines[0]["audio"]["sample_rate"], 48_000);
    assert_eq!(lines[1]["frame"], 0);
    assert_eq!(lines[1]["artifacts"][0]["filename"], "thumbnail.jpeg");
    assert_eq!(lines[3]["frame"], 2);
}

#[test]
fn json_lines_rejects_out_of_order() {
    let p = promo();
    let f5 = Evaluator::eval_frame(&p, FrameIndex(5)).unwrap();
    let f4 = Evaluator::eval_frame(&p, FrameIndex(4)).unwrap();
    let mut sink = JsonLinesSink::new(Vec::<u8>::new());
    sink.begin(SinkConfig::for_promo(&p)).unwrap();
    sink.push_frame(&f5).unwrap();
    assert!(matches!(
        sink.push_frame(&f4),
        Err(PromoError::Evaluation(_))
    ));
}

#[test]
fn json_lines_create_reports_io_errors() {
    let err = match JsonLinesSink::create("target/no-such-dir/nested/promo.jsonl") {
        Ok(_) => panic!("created a sink in a missing directory"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("no-such-dir"), "{err}");
    match err {
        PromoError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {other:?}"),
    }
}
