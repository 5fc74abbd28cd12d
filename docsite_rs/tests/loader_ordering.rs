//! Fan-out / fan-in behavior of the section loader with controlled completion order.

use docsite::{FetchError, SectionEntry, SectionLoader, SectionRegistry, SectionSource};
use futures::channel::oneshot;
use futures::executor::block_on;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::HashMap;

type Reply = Result<String, FetchError>;

/// Each fetch parks on a oneshot until the test resolves it.
struct GatedSource {
    pending: RefCell<HashMap<String, oneshot::Receiver<Reply>>>,
    started: RefCell<Vec<String>>,
}

impl GatedSource {
    fn new(paths: &[&str]) -> (Self, HashMap<String, oneshot::Sender<Reply>>) {
        let mut senders = HashMap::new();
        let mut receivers = HashMap::new();
        for path in paths {
            let (tx, rx) = oneshot::channel();
            senders.insert(path.to_string(), tx);
            receivers.insert(path.to_string(), rx);
        }
        let source = Self {
            pending: RefCell::new(receivers),
            started: RefCell::new(Vec::new()),
        };
        (source, senders)
    }
}

impl SectionSource for GatedSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.started.borrow_mut().push(path.to_string());
        let rx = self
            .pending
            .borrow_mut()
            .remove(path)
            .ok_or_else(|| FetchError::Network(format!("no gate for {path}")))?;
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Network("request dropped".into())))
    }
}

fn registry() -> SectionRegistry {
    SectionRegistry::new(vec![
        SectionEntry::new("features", "a.html"),
        SectionEntry::new("techStack", "b.html"),
        SectionEntry::new("installation", "c.html"),
    ])
    .expect("valid registry")
}

#[test]
fn test_reverse_completion_keeps_registry_order() {
    let (source, mut senders) = GatedSource::new(&["a.html", "b.html", "c.html"]);
    let loader = SectionLoader::new(registry(), source);

    let (html, ()) = block_on(async {
        futures::join!(loader.load_all_sections(), async {
            for path in ["c.html", "b.html", "a.html"] {
                let tx = senders.remove(path).expect("sender");
                let _ = tx.send(Ok(format!("<p>{path}</p>")));
            }
        })
    });

    assert_eq!(
        html.expect("batch succeeds"),
        [
            r#"<section id="features"><p>a.html</p></section>"#,
            r#"<section id="techStack"><p>b.html</p></section>"#,
            r#"<section id="installation"><p>c.html</p></section>"#,
        ]
        .join("\n")
    );
}

#[test]
fn test_all_fetches_start_before_any_completes() {
    let (source, mut senders) = GatedSource::new(&["a.html", "b.html", "c.html"]);
    let loader = SectionLoader::new(registry(), source);
    let mut started_when_first_resolved = 0;

    let (result, ()) = block_on(async {
        futures::join!(loader.fetch_sections(), async {
            started_when_first_resolved = loader_started(&loader);
            for (_, tx) in senders.drain() {
                let _ = tx.send(Ok(String::new()));
            }
        })
    });

    assert_eq!(started_when_first_resolved, 3);
    assert_eq!(result.expect("batch succeeds").len(), 3);
}

#[test]
fn test_one_failure_among_many() {
    let (source, mut senders) = GatedSource::new(&["a.html", "b.html", "c.html"]);
    let loader = SectionLoader::new(registry(), source);

    let (html, ()) = block_on(async {
        futures::join!(loader.load_all_sections(), async {
            let _ = senders.remove("a.html").unwrap().send(Ok("<p>A</p>".into()));
            let _ = senders.remove("b.html").unwrap().send(Err(FetchError::Status {
                path: "b.html".into(),
                status: 404,
            }));
            // dropping the sender aborts the request
            drop(senders.remove("c.html"));
        })
    });

    let html = html.expect("batch succeeds");
    let lines: Vec<_> = html.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"<section id="features"><p>A</p></section>"#,
            r#"<section id="techStack"><p>Error loading section content.</p></section>"#,
            r#"<section id="installation"><p>Error loading section content.</p></section>"#,
        ]
    );
}

fn loader_started(loader: &SectionLoader<GatedSource>) -> usize {
    loader.source().started.borrow().len()
}
