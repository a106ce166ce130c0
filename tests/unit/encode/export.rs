use super::*;
use crate::{config::PromoConfig, encode::sink::InMemorySink, eval::fingerprint};

fn promo() -> Promo {
    Promo::new(&PromoConfig::default()).unwrap()
}

#[test]
fn export_all_streams_every_frame_in_order() {
    let p = promo();
    let mut sink = InMemorySink::new();
    let stats = export_all(&p, ExportOpts::default(), &mut sink).unwrap();
    assert_eq!(stats.frames_total, 525);
    assert!(sink.is_ended());
    assert_eq!(sink.frames().len(), 525);
    for (i, f) in sink.frames().iter().enumerate() {
        assert_eq!(f.frame, FrameIndex(i as u64));
    }
}

#[test]
fn chunking_and_parallelism_do_not_change_output() {
    let p = promo();
    let range = FrameRange::with_len(120, 50);

    let mut a = InMemorySink::new();
    let sa = export_range(&p, range, ExportOpts::default(), &mut a).unwrap();

    let mut b = InMemorySink::new();
    let opts = ExportOpts {
        parallel: true,
        threads: Some(3),
        chunk_size: 7,
    };
    let sb = export_range(&p, range, opts, &mut b).unwrap();

    assert_eq!(sa, sb);
    assert_eq!(a.frames(), b.frames());
}

#[test]
fn static_frames_match_their_predecessor() {
    let p = promo();
    let range = FrameRange::with_len(0, 150);
    let mut sink = InMemorySink::new();
    let stats = export_range(&p, range, ExportOpts::default(), &mut sink).unwrap();

    let expected = sink
        .frames()
        .windows(2)
        .filter(|w| fingerprint(&w[0]) == fingerprint(&w[1]))
        .count() as u64;
    assert_eq!(stats.frames_static, expected);
    assert!(stats.frames_static < stats.frames_total);
}

#[test]
fn rejects_empty_or_overlong_ranges() {
    let p = promo();
    let mut sink = InMemorySink::new();
    assert!(export_range(&p, FrameRange::with_len(3, 0), ExportOpts::default(), &mut sink).is_err());
    assert!(
        export_range(&p, FrameRange::with_len(520, 10), ExportOpts::default(), &mut sink).is_err()
    );
    assert!(sink.config().is_none());
}

#[test]
fn zero_chunk_size_is_treated_as_one() {
    let p = promo();
    let mut sink = InMemorySink::new();
    let opts = ExportOpts {
        chunk_size: 0,
        ..ExportOpts::default()
    };
    let stats = export_range(&p, FrameRange::with_len(0, 3), opts, &mut sink).unwrap();
    assert_eq!(stats.frames_total, 3);
}

#[test]
fn zero_threads_fail_before_begin() {
    let p = promo();
    let mut sink = InMemorySink::new();
    let opts = ExportOpts {
        parallel: true,
        threads: Some(0),
        chunk_size: 8,
    };
    assert!(export_range(&p, FrameRange::with_len(0, 20), opts, &mut sink).is_err());
    assert!(sink.config().is_none());
}
