use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn g3d2() -> Command {
	let mut cmd = Command::cargo_bin("g3d2").unwrap();
	cmd.env_remove("G3D2_CONFIG").env_remove("G3D2_LOG");
	cmd
}

#[test]
fn version() {
	g3d2()
		.arg("-V")
		.assert()
		.success()
		.stdout(format!("g3d2 {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn decode_file_low_nibble_first() {
	let temp = assert_fs::TempDir::new().unwrap();
	temp.child("in.hex").write_str("1eF0\n").unwrap();

	g3d2()
		.current_dir(&temp)
		.args(["decode", "in.hex"])
		.assert()
		.success()
		.stdout(predicate::eq(&[0xE1u8, 0x0F][..]))
		.stderr("");
}

#[test]
fn decode_stdin() {
	g3d2()
		.arg("decode")
		.write_stdin("1e")
		.assert()
		.success()
		.stdout(predicate::eq(&[0xE1u8][..]));
}

#[test]
fn decode_empty_is_not_an_error() {
	g3d2()
		.arg("decode")
		.write_stdin("\n")
		.assert()
		.success()
		.stdout("");
}

#[test]
fn decode_odd_length() {
	g3d2()
		.arg("decode")
		.write_stdin("f")
		.assert()
		.code(exitcode::DATAERR)
		.stdout("")
		.stderr(predicate::str::contains(
			"Odd string length, this is not hexadecimal data.",
		));
}

#[test]
fn decode_invalid_digit() {
	g3d2()
		.arg("decode")
		.write_stdin("00zz")
		.assert()
		.code(exitcode::DATAERR)
		.stdout("")
		.stderr(
			predicate::str::contains("This is not hexadecimal data.")
				.and(predicate::str::contains("at offset 2")),
		);
}

#[test]
fn decode_missing_file() {
	let temp = assert_fs::TempDir::new().unwrap();

	g3d2()
		.current_dir(&temp)
		.args(["decode", "nope.hex"])
		.assert()
		.code(exitcode::IOERR)
		.stderr(predicate::str::contains("unable to read"));
}

#[test]
fn encode_then_decode() {
	let temp = assert_fs::TempDir::new().unwrap();
	let all: Vec<u8> = (0..=255).collect();
	temp.child("all.bin").write_binary(&all).unwrap();

	let encoded = g3d2()
		.current_dir(&temp)
		.args(["encode", "all.bin"])
		.assert()
		.success()
		.stdout(predicate::str::starts_with("00102030"))
		.get_output()
		.stdout
		.clone();

	g3d2()
		.arg("decode")
		.write_stdin(encoded)
		.assert()
		.success()
		.stdout(predicate::eq(all.as_slice()));
}

#[test]
fn blend_raw_background() {
	let temp = assert_fs::TempDir::new().unwrap();
	temp.child("bg.bin").write_binary(&[0x21, 0x00]).unwrap();

	g3d2()
		.current_dir(&temp)
		.args(["blend", "--background", "bg.bin"])
		.write_stdin("f8f81f2f\n")
		.assert()
		.success()
		.stdout(predicate::eq(&[0x87u8, 0x10][..]));
}

#[test]
fn blend_hex_background_and_hex_output() {
	let temp = assert_fs::TempDir::new().unwrap();
	// 0xff as G3D2 hex
	temp.child("bg.hex").write_str("ff\n").unwrap();
	temp.child("g3d2.toml")
		.write_str("[input]\ntrim_whitespace = true\n[output]\nformat = \"hex\"\n")
		.unwrap();

	g3d2()
		.current_dir(&temp)
		.args(["--config", "g3d2.toml", "blend", "--background-hex", "-b", "bg.hex"])
		.write_stdin("0000")
		.assert()
		.success()
		.stdout("ee\n");
}

#[test]
fn blend_background_length_mismatch() {
	let temp = assert_fs::TempDir::new().unwrap();
	temp.child("bg.bin").write_binary(&[0x00]).unwrap();

	g3d2()
		.current_dir(&temp)
		.args(["blend", "-b", "bg.bin"])
		.write_stdin("1f2f1f2f")
		.assert()
		.code(exitcode::DATAERR)
		.stdout("")
		.stderr(predicate::str::contains(
			"background is 1 bytes long, expected 2",
		));
}

#[test]
fn blend_not_multiple_of_four() {
	let temp = assert_fs::TempDir::new().unwrap();
	temp.child("bg.bin").write_binary(&[0x00]).unwrap();

	g3d2()
		.current_dir(&temp)
		.args(["blend", "-b", "bg.bin"])
		.write_stdin("1f")
		.assert()
		.code(exitcode::DATAERR)
		.stderr(predicate::str::contains("not a multiple of 4"));
}

#[test]
fn config_from_env() {
	let temp = assert_fs::TempDir::new().unwrap();
	temp.child("cfg.toml")
		.write_str("[input]\ntrim_whitespace = false\n[output]\nformat = \"raw\"\n")
		.unwrap();

	g3d2()
		.current_dir(&temp)
		.env("G3D2_CONFIG", temp.child("cfg.toml").path())
		.arg("decode")
		.write_stdin("1e\n")
		.assert()
		.code(exitcode::DATAERR)
		.stderr(predicate::str::contains("Odd string length"));
}

#[test]
fn missing_config() {
	g3d2()
		.args(["--config", "/nonexistent/g3d2.toml", "decode"])
		.write_stdin("1e")
		.assert()
		.code(exitcode::CONFIG)
		.stderr(predicate::str::contains("unable to read config file"));
}

#[test]
fn print_config() {
	g3d2()
		.arg("print-config")
		.assert()
		.success()
		.stdout(
			predicate::str::contains("trim_whitespace = true")
				.and(predicate::str::contains("format = \"raw\"")),
		);
}
