/*!
Additional documentation.

# Root Forms

These tables summarise what the classifier recognises at the start of a path.  "Root" is the part reported by `Classification::root`; it always includes any prefix.

| Kind | Examples | Root |
| ---- | -------- | ---- |
| `Relative` | `dir\file.txt`, `file` | (empty) |
| `SlashRooted` | `\dir`, `/dir` | `\`, `/` |
| `DriveLetterRelative` | `C:`, `C:dir` | `C:` |
| `DriveLetterRooted` | `C:\dir`, `C:/dir` | `C:\`, `C:/` |
| `UncRooted` | `\\server\share\dir`, `\\server\share\` | `\\server\share\` |
| `HomeRooted` | `~`, `~\dir` | `~` |

## Long-path Prefixes

| Prefix | Followed by | Kind |
| ------ | ----------- | ---- |
| `\\?\UNC\` | `server\share\dir` | `UncRooted` |
| `\\?\UNC\` | anything else | `UncIncomplete` |
| `\\?\` | `server\share\dir` | `UncRooted` |
| `\\?\` | `C:\dir` | `DriveLetterRooted` |
| `\\?\` | `C:dir` | `DriveLetterRelative` |
| `\\?\` | anything else | `Relative` |

Inside a prefixed path, `/` is *not* a separator, and is reported as `InvalidChars` unless `IGNORE_INVALID_CHARS_IN_LONG_PATH` is set.

## Failures

| Kind | Cause |
| ---- | ----- |
| `Empty` | Zero-length input. |
| `Invalid` | `\\` followed by something which cannot start a server name or prefix, or too short to be either. |
| `InvalidChars` | `< > | ? * "` or `:` after the root. |
| `InvalidSlashRuns` | Consecutive separators, including one straddling the end of the root. |
| `UncIncomplete` | `\\server`, `\\server\share`: no separator after the share. |

# Flags

| Flag | Effect |
| ---- | ------ |
| `RECOGNISE_TILDE_HOME` | `~` alone, or followed by a separator, is `HomeRooted`. |
| `IGNORE_INVALID_CHARS` | Skips the `InvalidChars` scan (but not the long-path `/` check). |
| `IGNORE_INVALID_SLASH_RUNS` | Separator runs are accepted, and count as a single boundary. |
| `IGNORE_INVALID_CHARS_IN_LONG_PATH` | `/` is accepted inside a prefixed path. |

# Common Misconceptions and Mistakes

* *"`C:foo` is relative to the root of `C:`."*  It is relative to the current directory *of drive `C:`*, which is why it is `DriveLetterRelative`.

* *"`\foo` is absolute."*  It is relative to the root of the current drive.  It is rooted, but not absolute.

* *"`\\server\share` is a complete UNC path."*  Not for our purposes: without a separator after the share, there is nowhere for a directory to begin.

* *"`.bashrc` has no extension."*  Its stem is empty and its extension is `.bashrc`.  Only `.` and `..` are exempt.

* *"The parts are zero-terminated."*  They are views into your buffer.  None of them are terminated, and none of them outlive it.
*/
