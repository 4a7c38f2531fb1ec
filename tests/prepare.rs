use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use blogprep::error::Error;
use blogprep::pipelines::{Pipeline, PrepareConfig, PrepareDataset};
use blogprep::processing::Partition;

fn write_author(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn config(src: &Path, dst: &Path) -> PrepareConfig {
    PrepareConfig::new(src.to_path_buf(), dst.to_path_buf())
}

/// Locate the directory of an author, whatever its partition.
fn find_author_dir(dst: &Path, label: &str, id: u64) -> PathBuf {
    Partition::ALL
        .iter()
        .map(|p| dst.join(p.as_str()).join(label).join(id.to_string()))
        .find(|p| p.is_dir())
        .unwrap()
}

/// (partition, label, id) of every author directory under `dst`.
fn layout(dst: &Path) -> BTreeSet<(String, String, String)> {
    let mut authors = BTreeSet::new();
    for partition in std::fs::read_dir(dst).unwrap() {
        let partition = partition.unwrap();
        for label in std::fs::read_dir(partition.path()).unwrap() {
            let label = label.unwrap();
            for id in std::fs::read_dir(label.path()).unwrap() {
                let id = id.unwrap();
                authors.insert((
                    partition.file_name().to_string_lossy().into_owned(),
                    label.file_name().to_string_lossy().into_owned(),
                    id.file_name().to_string_lossy().into_owned(),
                ));
            }
        }
    }
    authors
}

#[test]
fn stray_brackets_and_empty_post() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_author(
        src.path(),
        "101.male.25.tech.Leo.xml",
        "<Blog>\n<date>14,May,2004</date>\n<post>Hello <world></post>\n\n<date>15,May,2004</date>\n<post></post>\n</Blog>\n",
    );

    let summary = PrepareDataset::new(config(src.path(), dst.path()))
        .run()
        .unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.posts, 2);

    let dir = find_author_dir(dst.path(), "20s", 101);
    assert_eq!(std::fs::read_to_string(dir.join("1.txt")).unwrap(), "Hello (world)");
    assert_eq!(std::fs::read_to_string(dir.join("2.txt")).unwrap(), "");
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);
}

#[test]
fn ampersand_is_removed() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_author(
        src.path(),
        "5.female.17.student.Aries.xml",
        "<Blog><post>A & B</post></Blog>",
    );

    PrepareDataset::new(config(src.path(), dst.path()))
        .run()
        .unwrap();

    let dir = find_author_dir(dst.path(), "10s", 5);
    assert_eq!(std::fs::read_to_string(dir.join("1.txt")).unwrap(), "A  B");
}

#[test]
fn reproducible_partitions() {
    let src = tempfile::tempdir().unwrap();
    for id in 1..=1000 {
        let age = 13 + (id % 35);
        write_author(
            src.path(),
            &format!("{}.male.{}.indUnk.Leo.xml", id, age),
            "<Blog><post>p</post></Blog>",
        );
    }

    let run = |dst: &Path| {
        let mut c = config(src.path(), dst);
        c.rewrite_sources = false;
        PrepareDataset::new(c).run().unwrap()
    };

    let dst_a = tempfile::tempdir().unwrap();
    let dst_b = tempfile::tempdir().unwrap();
    let summary_a = run(dst_a.path());
    let summary_b = run(dst_b.path());

    assert_eq!(summary_a, summary_b);
    assert_eq!(layout(dst_a.path()), layout(dst_b.path()));
    assert_eq!(layout(dst_a.path()).len(), 1000);

    let count = |p: Partition| summary_a.authors.get(&p).copied().unwrap_or(0);
    println!("{:?}", summary_a.authors);
    assert!((740..=860).contains(&count(Partition::Training)));
    assert!((60..=140).contains(&count(Partition::Validation)));
    assert!((60..=140).contains(&count(Partition::Test)));
}

#[test]
fn parallel_writes_same_output() {
    let src = tempfile::tempdir().unwrap();
    let posts: String = (1..=40).map(|i| format!("<post>post {}</post>", i)).collect();
    write_author(
        src.path(),
        "77.female.31.Arts.Pisces.xml",
        &format!("<Blog>{}</Blog>", posts),
    );

    let dst = tempfile::tempdir().unwrap();
    let mut c = config(src.path(), dst.path());
    c.parallel_writes = true;
    let summary = PrepareDataset::new(c).run().unwrap();
    assert_eq!(summary.posts, 40);

    let dir = find_author_dir(dst.path(), "30s", 77);
    for i in 1..=40 {
        let text = std::fs::read_to_string(dir.join(format!("{}.txt", i))).unwrap();
        assert_eq!(text, format!("post {}", i));
    }
}

#[test]
fn malformed_filename_aborts() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_author(src.path(), "abc.xml", "<Blog><post>x</post></Blog>");

    let result = PrepareDataset::new(config(src.path(), dst.path())).run();
    match result {
        Err(Error::File { path, source }) => {
            assert!(path.ends_with("abc.xml"));
            assert!(matches!(*source, Error::MalformedFilename(_)));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 0);
}

#[test]
fn unparsable_content_aborts() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_author(
        src.path(),
        "9.male.22.tech.Leo.xml",
        "<Blog><post>first</post><post>never closed</Blog>",
    );

    let result = PrepareDataset::new(config(src.path(), dst.path())).run();
    assert!(matches!(result, Err(Error::File { .. })));

    // nothing written for that author, not even the first post
    assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 0);
}

#[test]
fn skip_errors() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_author(src.path(), "abc.xml", "<Blog><post>x</post></Blog>");
    write_author(src.path(), "9.male.22.tech.Leo.xml", "<Blog><post>x</Blog>");
    write_author(src.path(), "10.male.22.tech.Leo.xml", "<Blog><post>kept</post></Blog>");

    let mut c = config(src.path(), dst.path());
    c.skip_errors = true;
    let summary = PrepareDataset::new(c).run().unwrap();

    assert_eq!(summary.files, 3);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.posts, 1);

    let dir = find_author_dir(dst.path(), "20s", 10);
    assert_eq!(std::fs::read_to_string(dir.join("1.txt")).unwrap(), "kept");
}

#[test]
fn nested_input_directories() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    let nested = src.path().join("part1/part2");
    std::fs::create_dir_all(&nested).unwrap();
    write_author(src.path(), "1.male.15.Student.Leo.xml", "<Blog><post>a</post></Blog>");
    write_author(&nested, "2.female.45.Law.Virgo.xml", "<Blog><post>b</post></Blog>");

    let summary = PrepareDataset::new(config(src.path(), dst.path()))
        .run()
        .unwrap();
    assert_eq!(summary.files, 2);

    let dir = find_author_dir(dst.path(), "10s", 1);
    assert_eq!(std::fs::read_to_string(dir.join("1.txt")).unwrap(), "a");
    let dir = find_author_dir(dst.path(), "30s", 2);
    assert_eq!(std::fs::read_to_string(dir.join("1.txt")).unwrap(), "b");
}

#[test]
fn rerun_over_existing_output() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    write_author(
        src.path(),
        "3.male.28.tech.Leo.xml",
        "<Blog>\r\n<post>\r\n  one\u{7}\r\n</post>\r\n</Blog>",
    );

    let first = PrepareDataset::new(config(src.path(), dst.path()))
        .run()
        .unwrap();
    // sources are now sanitized, a second run sees the same content
    let second = PrepareDataset::new(config(src.path(), dst.path()))
        .run()
        .unwrap();
    assert_eq!(first, second);

    let dir = find_author_dir(dst.path(), "20s", 3);
    assert_eq!(std::fs::read_to_string(dir.join("1.txt")).unwrap(), "  one");
}
