//! Tests for command-line parsing and end-to-end collage processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use photocollage::CollageError;
    use photocollage::io::cli::{Cli, CollageProcessor};
    use photocollage::io::progress::ProgressManager;
    use photocollage::io::configuration::{
        DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_TILE_SIZE,
    };
    use std::fs;
    use std::path::PathBuf;

    // Tests CLI parsing with only required photo argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "photo.jpg"]);

        assert_eq!(cli.inputs, vec![PathBuf::from("photo.jpg")]);
        assert_eq!(cli.width, DEFAULT_CANVAS_WIDTH);
        assert_eq!(cli.height, DEFAULT_CANVAS_HEIGHT);
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(cli.front.is_empty());
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the width and height long names
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "a.png",
            "photos",
            "--width",
            "800",
            "--height",
            "600",
            "--tile-size",
            "150",
            "--seed",
            "9",
            "--output-dir",
            "out",
            "--front",
            "3",
            "--front",
            "1",
            "--quiet",
        ]);

        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(cli.width, 800);
        assert_eq!(cli.height, 600);
        assert_eq!(cli.tile_size, 150);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.front, vec![3, 1]);
        assert!(cli.quiet);
    }

    // Tests short flag parsing (-w, -H, -t, -s, -f)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "a.png", "-w", "640", "-H", "480", "-t", "90", "-s", "5", "-f", "2",
        ]);

        assert_eq!(cli.width, 640);
        assert_eq!(cli.height, 480);
        assert_eq!(cli.tile_size, 90);
        assert_eq!(cli.seed, Some(5));
        assert_eq!(cli.front, vec![2]);
    }

    // Tests zero and non-numeric sizes are rejected at parse time
    // Verified by removing the range restriction on the value parser
    #[test]
    fn test_cli_rejects_invalid_sizes() {
        assert!(Cli::try_parse_from(["program", "a.png", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["program", "a.png", "--tile-size", "big"]).is_err());
        assert!(Cli::try_parse_from(["program"]).is_err());
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        assert!(Cli::parse_from(["program", "a.png"]).should_show_progress());
        assert!(!Cli::parse_from(["program", "a.png", "-q"]).should_show_progress());
    }

    // Tests full import, layout, restack and export over a directory
    // Verified by skipping the export step
    #[test]
    fn test_process_exports_collage() {
        let dir = tempfile::tempdir().expect("temp dir");
        let photos = dir.path().join("photos");
        fs::create_dir_all(&photos).expect("photo dir");
        fs::write(photos.join("a.png"), crate::png_bytes(40, 30, [255, 0, 0, 255]))
            .expect("write a");
        fs::write(photos.join("b.png"), crate::png_bytes(30, 40, [0, 0, 255, 255]))
            .expect("write b");
        fs::write(photos.join("notes.txt"), b"not a photo").expect("write notes");
        let output_dir = dir.path().join("out");

        let cli = Cli::parse_from([
            "program".into(),
            photos.clone().into_os_string(),
            "-w".into(),
            "300".into(),
            "-H".into(),
            "200".into(),
            "-t".into(),
            "100".into(),
            "-s".into(),
            "7".into(),
            "-f".into(),
            "0".into(),
            "-o".into(),
            output_dir.clone().into_os_string(),
            "-q".into(),
        ]);
        let mut processor = CollageProcessor::new(cli);

        let output = processor.process().expect("processing should succeed");

        assert!(output.starts_with(&output_dir));
        let name = output
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        assert!(name.starts_with("photo-collage-") && name.ends_with(".png"));

        let exported = image::open(&output).expect("exported PNG decodes");
        assert_eq!((exported.width(), exported.height()), (300, 200));
        assert_eq!(processor.session().pool().len(), 2);
    }

    // Tests an empty import reports the missing-photos precondition and writes nothing
    // Verified by defaulting to an empty layout instead of failing
    #[test]
    fn test_process_without_photos_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let empty = dir.path().join("empty");
        fs::create_dir_all(&empty).expect("empty dir");
        let output_dir = dir.path().join("out");

        let cli = Cli::parse_from([
            "program".into(),
            empty.into_os_string(),
            "-o".into(),
            output_dir.clone().into_os_string(),
            "-q".into(),
        ]);
        let result = CollageProcessor::new(cli).process();

        assert!(matches!(result, Err(CollageError::EmptyPool)));
        assert!(!output_dir.exists());
    }

    // Tests a missing input path is reported as a parameter error
    // Verified by silently ignoring missing paths
    #[test]
    fn test_process_missing_input() {
        let cli = Cli::parse_from(["program", "/definitely/not/here.png", "-q"]);
        let result = CollageProcessor::new(cli).process();

        assert!(matches!(
            result,
            Err(CollageError::InvalidParameter {
                parameter: "input",
                ..
            })
        ));
    }

    // Tests progress bars are cleared when processing fails
    // Verified by finishing the bars only after a successful export
    #[test]
    fn test_process_failure_finishes_progress() {
        let dir = tempfile::tempdir().expect("temp dir");
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, b"not a photo").expect("write notes");

        let cli = Cli::parse_from([
            "program".into(),
            notes.into_os_string(),
            "-o".into(),
            dir.path().join("out").into_os_string(),
        ]);
        let mut processor = CollageProcessor::new(cli);

        let result = processor.process();

        assert!(matches!(result, Err(CollageError::EmptyPool)));
        assert!(
            processor
                .progress_manager()
                .is_some_and(ProgressManager::is_finished)
        );
    }
}
