//! Routing a line to whatever handles it.

use super::commands::{lookup, CommandContext};
use super::parser::{parse, Invocation};
use super::reply::{Interpretation, Reply};
use super::{files, games, navigation, suggest};
use crate::vfs::VirtualDirectory;

/// Interpret one raw input line.
///
/// Never fails: anything unrecognized becomes an informative reply.
pub fn interpret(ctx: &CommandContext<'_>, raw: &str) -> Interpretation {
    match parse(raw) {
        Invocation::Empty => Interpretation::reply(Reply::Silent),
        Invocation::Clear => Interpretation::reply(Reply::Clear),
        Invocation::ListLong => Interpretation::lines(navigation::list_long(ctx)),
        Invocation::ChangeDirectory(target) => {
            navigation::change_directory(ctx, target.as_deref())
        }
        Invocation::Concatenate(target) => {
            Interpretation::lines(files::concatenate(ctx, target.as_deref()))
        }
        Invocation::Word(line) => Interpretation::reply(run_word(ctx, raw, &line)),
    }
}

fn run_word(ctx: &CommandContext<'_>, raw: &str, line: &str) -> Reply {
    if ctx.directory == VirtualDirectory::Games {
        if let Some(lines) = games::run(ctx, line) {
            return Reply::lines(lines);
        }
    }
    match lookup(line) {
        Some(spec) => spec.run(ctx),
        None => Reply::lines(suggest::not_found(ctx, raw, line)),
    }
}
