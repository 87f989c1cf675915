// src/summary/render.rs

use super::folder::{Caption, TopicFolder, escape_caption};
use crate::{constants::summary::*, utils::join_url_path};

pub fn render_document(root_name: &str, topics: &[TopicFolder]) -> String {
    let mut doc = String::new();
    doc.push_str(DOCUMENT_TITLE);
    doc.push_str("\n\n");
    doc.push_str(DOCUMENT_INTRO);
    doc.push_str("\n\n---\n\n");

    for topic in topics {
        render_section(&mut doc, root_name, topic);
    }
    doc
}

fn render_section(doc: &mut String, root_name: &str, topic: &TopicFolder) {
    doc.push_str(&format!("## {}\n\n", topic.name));

    doc.push_str(CAPTION_HEADING);
    doc.push_str("\n\n");
    match &topic.caption {
        Caption::Text(text) => doc.push_str(&escape_caption(text)),
        Caption::Missing => doc.push_str(CAPTION_MISSING),
        Caption::Unreadable(reason) => doc.push_str(&format!("*(读取文案失败: {})*", reason)),
    }
    doc.push_str("\n\n");

    doc.push_str(IMAGES_HEADING);
    doc.push_str("\n\n");
    if topic.images.is_empty() {
        doc.push_str(IMAGES_MISSING);
    } else {
        for image in &topic.images {
            doc.push_str(&image_tag(root_name, &topic.name, image));
        }
    }
    doc.push_str("\n\n");

    doc.push_str(SECTION_SEPARATOR);
}

/// HTML 标签而不是 `![]()`，这样才能带上缩放比例
fn image_tag(root_name: &str, folder: &str, image: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" style="zoom:{};" /> "#,
        join_url_path(&[root_name, folder, image]),
        image,
        IMAGE_ZOOM
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn topic(name: &str, caption: Caption, images: &[&str]) -> TopicFolder {
        TopicFolder {
            name: name.to_string(),
            path: PathBuf::from(name),
            caption,
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_full_section_layout() {
        let doc = render_document(
            "Outputs",
            &[topic(
                "1_a",
                Caption::Text("#标题\n正文".to_string()),
                &["image_1.jpg", "image_2.png"],
            )],
        );

        let expected = concat!(
            "# 项目内容整理汇总\n\n",
            "> 本文档自动汇总了各个文件夹下的文案内容与已下载的图片。\n\n---\n\n",
            "## 1_a\n\n",
            "### 📝 文案内容\n\n",
            "\\#标题\n正文\n\n",
            "### 🖼️ 图片展示\n\n",
            "<img src=\"Outputs/1_a/image_1.jpg\" alt=\"image_1.jpg\" style=\"zoom:22%;\" /> ",
            "<img src=\"Outputs/1_a/image_2.png\" alt=\"image_2.png\" style=\"zoom:22%;\" /> ",
            "\n\n",
            "\n\n<br>\n\n---\n\n<br>\n\n",
        );
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_placeholders() {
        let doc = render_document(
            "Outputs",
            &[
                topic("2_b", Caption::Missing, &[]),
                topic("3_c", Caption::Unreadable("stream did not contain valid UTF-8".into()), &[]),
            ],
        );

        assert!(doc.contains("## 2_b\n\n### 📝 文案内容\n\n*(未找到文案文件)*\n\n### 🖼️ 图片展示\n\n*(暂无图片)*\n\n"));
        assert!(doc.contains("*(读取文案失败: stream did not contain valid UTF-8)*"));
        assert_eq!(doc.matches("*(暂无图片)*").count(), 2);
    }

    #[test]
    fn test_empty_document_has_header_only() {
        assert_eq!(
            render_document("Outputs", &[]),
            "# 项目内容整理汇总\n\n> 本文档自动汇总了各个文件夹下的文案内容与已下载的图片。\n\n---\n\n"
        );
    }
}
