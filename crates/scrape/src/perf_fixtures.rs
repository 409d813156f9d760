pub const BLOCK_TEMPLATE: &str =
    "<div class=\"box\"><span>hello</span><img src=\"x\"></div>";

pub fn make_blocks(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks);
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html
}

/// `blocks` repeated content blocks inside one body element.
pub fn make_page(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks + 32);
    html.push_str("<body class=\"page\">");
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html.push_str("</body>");
    html
}
