#[cfg(test)]
pub const BILINGUAL_POST: &str = r#"---
title: Learning Rust
description: Notes from learning Rust
pubDate: 2024-03-15
tags: [rust, learning, rust]
titleVi: Học Rust
descriptionVi: Ghi chép khi học Rust
---

<div data-lang="en">

I started learning Rust this year.

</div>

<div data-lang="vi">

Tôi bắt đầu học Rust năm nay.

</div>
"#;

#[cfg(test)]
pub const ENGLISH_ONLY_POST: &str = r#"---
title: Weekly notes
description: Things I read this week
pubDate: "2024-01-08"
author: Guest Writer
tags: []
---

Nothing to translate here.
"#;

#[cfg(test)]
pub const MISSING_TITLE_POST: &str = r#"---
description: A post without a title
pubDate: 2024-02-01
tags:
  - draft
---

Body.
"#;
