//! End-to-end contract of the parse pipeline and the query surface, exercised
//! through the public API only.

use scrape::{
    DiagnosticCode, ParseDiagnostic, PathValue, ROOT_TAG, build_tree, build_tree_with,
};

const REALISTIC_PAGE: &str = concat!(
    "<!DOCTYPE html>",
    "<html>",
    "<head>",
    "<meta charset=\"utf-8\">",
    "<title>News</title>",
    "<script src=\"app.js\"></script>",
    "</head>",
    "<body class=\"home\">",
    "<div id=\"header\"><h1>Daily</h1></div>",
    "<div class=\"story\"><h2 class=\"title\">One</h2><p>First story.<br>More</p></div>",
    "<div class=\"story\"><h2 class=\"title\">Two</h2><p>Second story.</p></div>",
    "<script>var data = \"<div>not real</div>\";</script>",
    "<img src=\"logo.png\">",
    "</body>",
    "</html>",
);

#[test]
fn parent_links_round_trip() {
    let tree = build_tree(REALISTIC_PAGE);
    for id in tree.nodes() {
        match tree.parent(id) {
            Some(parent) => {
                let count = tree.children(parent).iter().filter(|&&c| c == id).count();
                assert_eq!(count, 1, "node {id:?} appears {count} times under its parent");
            }
            None => assert_eq!(id, tree.root(), "only the root may lack a parent"),
        }
    }
}

#[test]
fn void_elements_never_accumulate_children() {
    let tree = build_tree("<div><br><p>x</p></div>");
    let br = tree.first_by_tag("br").expect("br exists");
    let p = tree.first_by_tag("p").expect("p exists");
    assert!(tree.children(br).is_empty());
    assert_eq!(tree.parent(p), tree.parent(br), "p must be a sibling of br, not its child");

    let tree = build_tree(REALISTIC_PAGE);
    for tag in ["br", "img", "meta"] {
        for id in tree.find_by_tag_and_attrs(tag, &[]) {
            assert!(tree.children(id).is_empty(), "void {tag} grew children");
        }
    }
}

#[test]
fn queries_are_idempotent() {
    let tree = build_tree(REALISTIC_PAGE);
    let first = tree.find_by_tag_and_attrs("h2", &[("class", "title")]);
    let second = tree.find_by_tag_and_attrs("h2", &[("class", "title")]);
    assert_eq!(first, second);
    assert_eq!(
        tree.get_by_address("html/body/div[1]/h2[0]/@text"),
        tree.get_by_address("html/body/div[1]/h2[0]/@text")
    );
}

#[test]
fn both_story_titles_come_back_in_document_order() {
    let tree = build_tree(REALISTIC_PAGE);
    let hits = tree.find_by_tag_and_attrs("h2", &[("class", "title")]);
    let texts: Vec<&str> = hits.iter().map(|&id| tree.get(id).text.as_str()).collect();
    assert_eq!(texts, ["One", "Two"]);
}

#[test]
fn script_content_stays_out_of_the_tree() {
    let tree = build_tree(REALISTIC_PAGE);
    assert!(tree.find_by_tag_and_attrs("script", &[]).is_empty());
    let divs = tree.find_by_tag_and_attrs("div", &[]);
    assert_eq!(divs.len(), 3, "only the header and two stories: {divs:?}");
    for id in tree.nodes() {
        assert!(
            !tree.get(id).text.contains("not real"),
            "script text leaked into {:?}",
            tree.get(id)
        );
    }
}

#[test]
fn concurrent_queries_see_the_same_tree() {
    let tree = build_tree(REALISTIC_PAGE);
    let expected = tree.find_by_tag_and_attrs("h2", &[("class", "title")]);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..32 {
                    let hits = tree.find_by_tag_and_attrs("h2", &[("class", "title")]);
                    assert_eq!(hits, expected);
                    let title = tree.get_by_address("html/head/title/@text");
                    assert_eq!(title, Some(PathValue::Text("News")));
                }
            });
        }
    });
}

#[test]
fn bracket_paths_resolve_text_and_nodes() {
    let tree = build_tree("<body><div>Hello</div><div>World</div></body>");
    assert_eq!(
        tree.get_by_address("body/div[0]/@text"),
        Some(PathValue::Text("Hello"))
    );
    let body = tree.body().expect("body exists");
    let second_div = tree.children(body)[1];
    assert_eq!(
        tree.get_by_address("body/div[1]/@element"),
        Some(PathValue::Element(second_div))
    );
    // Out of range stays put instead of failing the walk.
    assert_eq!(
        tree.get_by_address("body/div[9]/@text"),
        Some(PathValue::Text(""))
    );
}

#[test]
fn comment_fragments_produce_no_nodes() {
    let tree = build_tree("<!DOCTYPE html><!-- note --><p>x</p>");
    let children = tree.children(tree.root());
    assert_eq!(children.len(), 1, "only the p survives: {children:?}");
    assert_eq!(tree.get(children[0]).tag, "p");
}

#[test]
fn script_in_an_attribute_value_swallows_the_subtree() {
    let tree = build_tree("<body><div class=\"script\">gone</div><p>gone too</p>");
    assert!(tree.find_by_tag_and_attrs("div", &[]).is_empty());
    assert!(tree.find_by_tag_and_attrs("p", &[]).is_empty());
    assert_eq!(tree.len(), 2, "root and body only");
}

#[test]
fn noscript_blocks_are_swallowed_and_closed() {
    // `noscript` contains `script`, so the opener enters script mode; the
    // `/noscript` closer clears it without matching `/script`.
    let tree = build_tree("<noscript><p>fallback</p></noscript><div>after</div>");
    assert!(tree.find_by_tag_and_attrs("noscript", &[]).is_empty());
    assert!(tree.find_by_tag_and_attrs("p", &[]).is_empty());
    assert_eq!(tree.len(), 2, "root and div only");
    let children = tree.children(tree.root());
    assert_eq!(children.len(), 1, "only the div survives: {children:?}");
    assert_eq!(tree.get(children[0]).tag, "div");
    assert_eq!(tree.get(children[0]).text, "after");
}

#[test]
fn unmatched_closing_tags_become_nodes() {
    let tree = build_tree("<div></em>y</div>");
    let hits = tree.find_by_tag_and_attrs("/em", &[]);
    assert_eq!(hits.len(), 1, "the stray closer is kept: {hits:?}");
    assert_eq!(tree.get(hits[0]).text, "y");
}

#[test]
fn empty_input_still_yields_a_tree() {
    let tree = build_tree("");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get_by_address("@text"), Some(PathValue::Text("")));
    // An unknown tag stays on the root, so the walk still terminates there.
    assert_eq!(tree.get_by_address("body/@text"), Some(PathValue::Text("")));
}

#[test]
fn diagnostic_sink_is_append_only() {
    let mut diags = vec![ParseDiagnostic {
        code: DiagnosticCode::EmptyFragment,
        position: 999,
    }];
    let tree = build_tree_with("<<p>x", &mut diags);
    assert_eq!(diags.len(), 2, "existing entries must be kept: {diags:?}");
    assert_eq!(diags[0].position, 999);
    assert_eq!(diags[1].code, DiagnosticCode::EmptyFragment);
    assert_eq!(diags[1].position, 1);
    assert_eq!(tree.len(), 2);
}

#[test]
fn sinkless_build_behaves_identically() {
    let logged = build_tree("<<div>x<");
    let mut diags = Vec::new();
    let sunk = build_tree_with("<<div>x<", &mut diags);
    assert_eq!(logged.len(), sunk.len());
    assert_eq!(
        logged.get_by_address("div[0]/@text"),
        sunk.get_by_address("div[0]/@text")
    );
    assert_eq!(diags.len(), 2, "one for each empty fragment: {diags:?}");
}

#[test]
fn the_synthetic_root_is_a_queryable_node() {
    let tree = build_tree("<p>x");
    assert_eq!(tree.get(tree.root()).tag, ROOT_TAG);
    assert_eq!(tree.find_by_tag_and_attrs(ROOT_TAG, &[]), vec![tree.root()]);
}
