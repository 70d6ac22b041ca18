/// Rules shown before the first turn.
pub const RULES: &str = "
    WELCOME TO 'HUNT THE WUMPUS'

    THE WUMPUS LIVES IN A CAVE OF 20 ROOMS: EACH ROOM HAS 3 TUNNELS LEADING TO OTHER
    ROOMS. THE STANDARD MAP IS A DODECAHEDRON (IF YOU DON'T KNOW WHAT A
    DODECAHEDRON IS, ASK SOMEONE)

    ***
    HAZARDS:

    BOTTOMLESS PITS - TWO ROOMS HAVE BOTTOMLESS PITS IN THEM
    IF YOU GO THERE: YOU FALL INTO THE PIT (& LOSE!)

    SUPER BATS  - TWO OTHER ROOMS HAVE SUPER BATS. IF YOU GO THERE, A BAT GRABS YOU
    AND TAKES YOU TO SOME OTHER ROOM AT RANDOM. (WHICH MIGHT BE TROUBLESOME)

    WUMPUS:

    THE WUMPUS IS NOT BOTHERED BY THE HAZARDS (HE HAS SUCKER FEET AND IS TOO BIG FOR
    A BAT TO LIFT). USUALLY HE IS ASLEEP. TWO THINGS WAKE HIM UP: YOUR ENTERING HIS
    ROOM OR YOUR SHOOTING AN ARROW.

        IF THE WUMPUS WAKES, HE EATS YOU IF YOU ARE THERE, OTHERWISE, HE MOVES (P=0.75)
    ONE ROOM OR STAYS STILL (P=0.25). AFTER THAT, IF HE IS WHERE YOU ARE, HE EATS
    YOU UP (& YOU LOSE!)

    YOU:

    EACH TURN YOU MAY MOVE OR SHOOT A CROOKED ARROW
    MOVING: YOU CAN GO ONE ROOM (THRU ONE TUNNEL)
    ARROWS: YOU HAVE 5 ARROWS. YOU LOSE WHEN YOU RUN OUT.

        EACH ARROW CAN GO FROM 1 TO 5 ROOMS: YOU AIM BY TELLING THE COMPUTER THE ROOMS
    YOU WANT THE ARROW TO GO TO. IF THE ARROW CAN'T GO THAT WAY (IE NO TUNNEL) IT
    MOVES AT RANDOM TO THE NEXT ROOM.

        IF THE ARROW HITS THE WUMPUS: YOU WIN.

        IF THE ARROW HITS YOU: YOU LOSE.

    WARNINGS:

    WHEN YOU ARE ONE ROOM AWAY FROM WUMPUS OR HAZARD, THE COMPUTER SAYS:

    WUMPUS - 'I SMELL A WUMPUS'

    BAT - 'I HEAR BATS'

    PIT - 'I FEEL A DRAFT'

***
HUNT THE WUMPUS
";
