use std::collections::{HashMap, HashSet, VecDeque};

use memsim::{
    random_address, DefaultResolver, ResolveError, TraceEvent, CACHE_SIZE, MEMORY_SIZE,
    NUM_PAGES, PAGE_SIZE, TLB_SIZE,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn scenario_from_empty_state() {
    init_logger();
    let mut resolver = DefaultResolver::init();

    let first = resolver.resolve(300).unwrap();
    assert_eq!((first.page, first.offset), (1, 44));
    assert_eq!(first.data, "Data_0");
    assert_eq!(first.trace.len(), 3);

    let second = resolver.resolve(300).unwrap();
    assert_eq!(second.data, "Data_0");
    assert_eq!(
        second.trace,
        vec![
            TraceEvent::TlbHit { page: 1, frame: 0 },
            TraceEvent::CacheHit { frame: 0 }
        ]
    );
}

#[test]
fn boundaries() {
    let mut resolver = DefaultResolver::init();
    assert!(resolver.resolve(0).is_ok());
    assert!(resolver.resolve(MEMORY_SIZE as i64 - 1).is_ok());
    assert!(matches!(
        resolver.resolve(-1),
        Err(ResolveError::InvalidAddress(_))
    ));
    assert!(matches!(
        resolver.resolve(MEMORY_SIZE as i64),
        Err(ResolveError::InvalidAddress(_))
    ));
}

/// Replays a random address stream against a straightforward model of the
/// hierarchy and checks every result and every structure along the way.
#[test]
fn random_stream_matches_model() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(530);
    let mut resolver = DefaultResolver::init();

    let mut model_pt: HashMap<u32, u32> = HashMap::new();
    let mut model_tlb: VecDeque<(u32, u32)> = VecDeque::new();
    let mut model_cache: VecDeque<u32> = VecDeque::new();
    let mut faults = 0;
    let mut last_pt_len = 0;

    for _ in 0..5000 {
        let address = random_address(&mut rng);
        let page = (address as usize / PAGE_SIZE) as u32;
        let result = resolver.resolve(address).unwrap();

        let tlb_hit = model_tlb.iter().any(|(p, _)| *p == page);
        let frame = if tlb_hit {
            model_tlb.iter().find(|(p, _)| *p == page).unwrap().1
        } else {
            let frame = match model_pt.get(&page) {
                Some(frame) => *frame,
                None => {
                    let frame = (model_pt.len() % NUM_PAGES) as u32;
                    model_pt.insert(page, frame);
                    faults += 1;
                    frame
                }
            };
            if model_tlb.len() >= TLB_SIZE {
                model_tlb.pop_front();
            }
            model_tlb.push_back((page, frame));
            frame
        };
        if !model_cache.contains(&frame) {
            if model_cache.len() >= CACHE_SIZE {
                model_cache.pop_front();
            }
            model_cache.push_back(frame);
        }

        assert_eq!(result.tlb_hit(), tlb_hit);
        assert_eq!(result.frame, frame);
        assert_eq!(result.data, format!("Data_{}", frame));
        assert_eq!(result.data, resolver.memory().read(frame).unwrap());

        assert!(resolver.tlb().len() <= TLB_SIZE);
        assert!(resolver.cache().len() <= CACHE_SIZE);
        assert_eq!(
            resolver.tlb().iter().collect::<Vec<_>>(),
            Vec::from(model_tlb.clone())
        );
        assert_eq!(
            resolver.cache().iter().map(|(f, _)| f).collect::<Vec<_>>(),
            Vec::from(model_cache.clone())
        );

        let pt_len = resolver.page_table().len();
        assert!(pt_len >= last_pt_len);
        assert_eq!(pt_len, faults);
        last_pt_len = pt_len;
    }
    assert_eq!(resolver.stats().page_faults, faults as u64);
}

#[test]
fn evicted_entries_leave_exactly_once() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut resolver = DefaultResolver::init();
    let mut tlb_evictions = 0u64;
    let mut cache_evictions = 0u64;

    for _ in 0..2000 {
        let address = rng.gen_range(0..MEMORY_SIZE as i64);
        let held_pages: HashSet<_> = resolver.tlb().iter().map(|(p, _)| p).collect();
        let oldest_page = resolver.tlb().iter().next().map(|(p, _)| p);
        let oldest_frame = resolver.cache().iter().next().map(|(f, _)| f);

        let result = resolver.resolve(address).unwrap();
        if let Some(page) = result.tlb_eviction {
            assert!(held_pages.contains(&page));
            assert_eq!(Some(page), oldest_page);
            assert_eq!(resolver.tlb().lookup(page), None);
            tlb_evictions += 1;
        }
        if let Some(frame) = result.cache_eviction {
            assert_eq!(Some(frame), oldest_frame);
            assert_eq!(resolver.cache().lookup(frame), None);
            cache_evictions += 1;
        }
    }
    assert_eq!(resolver.stats().tlb_evictions, tlb_evictions);
    assert_eq!(resolver.stats().cache_evictions, cache_evictions);
}

#[test]
fn narration_matches_demo_output() {
    let mut resolver = DefaultResolver::init();
    let text = resolver.resolve(300).unwrap().to_string();
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "Accessing Virtual Address: 300 (Page 1, Offset 44)",
            "TLB Miss",
            "Page Fault: Loaded Page 1 into Frame 0",
            "Cache Miss: Loading Frame 0 into Cache",
            "Data at address 300: Data_0",
        ]
    );
}
