// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Natural ("human") string ordering.
//!
//! Runs of ASCII digits compare by numeric value, everything else compares
//! character by character. `msg2` sorts before `msg10`, and `de` before `en`.
//! The comparison is case-sensitive.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two strings using natural ordering.
///
/// Two strings compare equal only when they are identical. Digit runs with the
/// same numeric value but different zero padding order the shorter run first.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
	let mut left = a.chars().peekable();
	let mut right = b.chars().peekable();

	loop {
		match (left.peek().copied(), right.peek().copied()) {
			(None, None) => return Ordering::Equal,
			(None, Some(_)) => return Ordering::Less,
			(Some(_), None) => return Ordering::Greater,
			(Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
				let l_run = take_digits(&mut left);
				let r_run = take_digits(&mut right);
				let ord = compare_digit_runs(&l_run, &r_run);
				if ord != Ordering::Equal {
					return ord;
				}
			}
			(Some(l), Some(r)) => {
				if l != r {
					return l.cmp(&r);
				}
				left.next();
				right.next();
			}
		}
	}
}

/// Sort a slice of string-like values in natural order.
pub fn natural_sort<S: AsRef<str>>(values: &mut [S]) {
	values.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
	let mut run = String::new();
	while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
		run.push(c);
	}
	run
}

fn compare_digit_runs(l: &str, r: &str) -> Ordering {
	let l_trimmed = l.trim_start_matches('0');
	let r_trimmed = r.trim_start_matches('0');

	l_trimmed
		.len()
		.cmp(&r_trimmed.len())
		.then_with(|| l_trimmed.cmp(r_trimmed))
		.then_with(|| l.len().cmp(&r.len()))
}
