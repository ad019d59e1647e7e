#[cfg(test)]
pub const NEW_POST: &str = r#"---
title: "This is a title"
description: "Replace with description"
pubDate: 2024-02-27
author: "Vinh Nguyen"
tags: ["rust", "notes"]
titleVi: "Đây là tiêu đề"
descriptionVi: "Thay bằng mô tả"
---

<div data-lang="en">

This is a body example
Please remove it and replace with your content

</div>

<div data-lang="vi">

Đây là nội dung mẫu
Hãy xoá và thay bằng nội dung của bạn

</div>
"#;
